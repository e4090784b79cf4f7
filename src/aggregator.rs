/*!
 * File aggregation: walks the root and concatenates every surviving file
 * behind a header block
 */

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::filter::FileFilter;
use crate::scanner::{canonical_dir, leads_to_cycle, list_directory};
use crate::tree::TreeRenderer;
use crate::types::{AggregateStatistics, FileReportInfo, Snapshot};

/// Heading that opens every snapshot
pub const TREE_HEADING: &str = "Directory Tree:\n";
/// Marker line framing each file header
pub const HEADER_RULE: &str = "# ======================";

/// Header block placed before a file's content
pub fn file_header(relative: &str) -> String {
    format!(
        "\n\n{rule}\n# File: {relative}\n{rule}\n\n",
        rule = HEADER_RULE,
        relative = relative
    )
}

/// Aggregates file contents below a root directory into one buffer
pub struct Aggregator<'a> {
    root: PathBuf,
    filter: FileFilter<'a>,
    buffer: String,
    statistics: AggregateStatistics,
}

impl<'a> Aggregator<'a> {
    /// Create a new aggregator for the configured root
    pub fn new(config: &'a Config, root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            filter: FileFilter::new(config),
            buffer: String::new(),
            statistics: AggregateStatistics::default(),
        }
    }

    /// Walk the root and return the concatenated file blocks with their statistics
    pub fn aggregate(mut self) -> (String, AggregateStatistics) {
        let root = self.root.clone();
        self.process_directory(&root, &mut Vec::new());
        (self.buffer, self.statistics)
    }

    fn process_directory(&mut self, dir: &Path, ancestors: &mut Vec<PathBuf>) {
        ancestors.push(canonical_dir(dir));

        for entry in list_directory(dir) {
            let relative = match entry.path.strip_prefix(&self.root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => continue,
            };

            if entry.is_dir() {
                if self.filter.is_ignored_dir(&entry.name) {
                    debug!("Skipping ignored directory {}", relative.display());
                    continue;
                }
                if self.filter.should_exclude(&relative) {
                    debug!("Skipping excluded directory {}", relative.display());
                    continue;
                }
                if leads_to_cycle(ancestors, &entry) {
                    debug!("Not descending into symlink cycle {}", relative.display());
                    continue;
                }
                self.process_directory(&entry.path, ancestors);
                continue;
            }

            if self.filter.is_denied(&entry.name) || !self.filter.is_programming_file(&entry.name) {
                continue;
            }
            if self.filter.should_exclude(&relative) || !self.filter.should_include_file(&relative)
            {
                debug!("Filtered out {}", relative.display());
                continue;
            }

            self.append_file(&entry.path, &relative);
        }

        ancestors.pop();
    }

    fn append_file(&mut self, path: &Path, relative: &Path) {
        let display = relative.display().to_string();
        self.buffer.push_str(&file_header(&display));
        self.statistics.files_aggregated += 1;

        match fs::read_to_string(path) {
            Ok(content) => {
                let info = FileReportInfo {
                    lines: content.lines().count(),
                    chars: content.chars().count(),
                };
                self.buffer.push_str(&content);
                self.statistics.total_lines += info.lines;
                self.statistics.total_chars += info.chars;
                self.statistics.file_details.insert(display, info);
            }
            Err(e) => {
                warn!("Failed to read {}: {}", display, e);
                self.buffer
                    .push_str(&format!("\n# Error reading file {}: {}\n", display, e));
                self.statistics.read_errors += 1;
                self.statistics
                    .file_details
                    .insert(display, FileReportInfo::default());
            }
        }
    }
}

/// Build the full snapshot: the rendered tree followed by every file block
pub fn build_snapshot(config: &Config) -> Result<Snapshot> {
    let root = fs::canonicalize(&config.target_dir)
        .with_context(|| format!("Failed to resolve {}", config.target_dir.display()))?;
    info!("Building snapshot of {}", root.display());

    let tree = TreeRenderer::new(config).render(&root);
    let (body, statistics) = Aggregator::new(config, &root).aggregate();

    let mut text = String::with_capacity(TREE_HEADING.len() + tree.len() + 2 + body.len());
    text.push_str(TREE_HEADING);
    text.push_str(&tree);
    text.push_str("\n\n");
    text.push_str(&body);

    info!(
        "Aggregated {} files ({} read errors)",
        statistics.files_aggregated, statistics.read_errors
    );

    Ok(Snapshot { text, statistics })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FullcodeError;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_file_header_format() {
        assert_eq!(
            file_header("src/main.rs"),
            "\n\n# ======================\n# File: src/main.rs\n# ======================\n\n"
        );
    }

    #[test]
    fn test_aggregate_filters_and_counts() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("src")).unwrap();
        fs::write(root.join("src").join("lib.rs"), "pub fn a() {}\npub fn b() {}\n").unwrap();
        fs::write(root.join("notes.txt"), "not code").unwrap();
        fs::write(root.join("package.json"), "{}").unwrap();

        let config = Config::new(root);
        let (body, stats) = Aggregator::new(&config, root).aggregate();

        assert_eq!(
            body,
            format!(
                "{}pub fn a() {{}}\npub fn b() {{}}\n",
                file_header(&Path::new("src").join("lib.rs").display().to_string())
            )
        );
        assert_eq!(stats.files_aggregated, 1);
        assert_eq!(stats.total_lines, 2);
        assert_eq!(stats.read_errors, 0);
    }

    #[test]
    fn test_unreadable_content_is_annotated() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        let mut file = File::create(root.join("bad.py")).unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();
        fs::write(root.join("good.py"), "print('ok')").unwrap();

        let config = Config::new(root);
        let (body, stats) = Aggregator::new(&config, root).aggregate();

        assert!(body.contains("# File: bad.py"));
        assert!(body.contains("\n# Error reading file bad.py: "));
        assert!(body.contains("# File: good.py\n# ======================\n\nprint('ok')"));
        assert_eq!(stats.files_aggregated, 2);
        assert_eq!(stats.read_errors, 1);
    }

    #[test]
    fn test_ignored_root_is_still_aggregated() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("dist");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("app.js"), "run()").unwrap();

        let config = Config::new(&root);
        let snapshot = build_snapshot(&config).unwrap();

        assert!(snapshot.text.starts_with("Directory Tree:\ndist/ [EXCLUDED]\n\n\n"));
        assert!(snapshot.text.contains("# File: app.js"));
    }

    #[test]
    fn test_build_snapshot_missing_root() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing");
        let config = Config::new(&missing);

        let err = build_snapshot(&config).unwrap_err();
        assert!(matches!(err, FullcodeError::Unexpected(_)));
        assert!(err
            .to_string()
            .starts_with(&format!("Unexpected error: Failed to resolve {}: ", missing.display())));
    }

    #[cfg(unix)]
    #[test]
    fn test_mutual_symlinks_aggregate_each_file_once_per_route() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("a")).unwrap();
        fs::create_dir(root.join("b")).unwrap();
        fs::write(root.join("a").join("x.rs"), "fn x() {}").unwrap();
        std::os::unix::fs::symlink(root.join("b"), root.join("a").join("to_b")).unwrap();
        std::os::unix::fs::symlink(root.join("a"), root.join("b").join("to_a")).unwrap();

        let snapshot = build_snapshot(&Config::new(root)).unwrap();
        let text = &snapshot.text;

        assert_eq!(snapshot.statistics.files_aggregated, 2);
        assert_eq!(text.matches("fn x() {}").count(), 2);
        assert!(text.contains(&format!(
            "# File: {}\n",
            Path::new("a").join("x.rs").display()
        )));
        assert!(text.contains(&format!(
            "# File: {}\n",
            Path::new("b").join("to_a").join("x.rs").display()
        )));
    }
}
