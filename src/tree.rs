/*!
 * ASCII directory tree rendering
 */

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Config;
use crate::filter::FileFilter;
use crate::scanner::{canonical_dir, directory_name, leads_to_cycle, list_directory};
use crate::types::ListedEntry;

/// Indentation emitted once per depth level
pub const INDENT: &str = "│   ";
/// Marker placed before every entry below the root
pub const BRANCH: &str = "├── ";
/// Suffix of a collapsed, ignored directory
pub const EXCLUDED_MARKER: &str = "[EXCLUDED]";

/// Renders the structural overview of a directory
///
/// Only name-based rules apply here: ignored directories collapse to one
/// line and hard-excluded file names are hidden. Extension and inclusion
/// filters are left to the aggregator.
pub struct TreeRenderer<'a> {
    filter: FileFilter<'a>,
}

impl<'a> TreeRenderer<'a> {
    /// Create a new renderer
    pub fn new(config: &'a Config) -> Self {
        Self {
            filter: FileFilter::new(config),
        }
    }

    /// Render the tree rooted at `root`, one line per entry
    pub fn render(&self, root: &Path) -> String {
        let mut tree = String::new();
        self.walk(root, 0, &mut Vec::new(), &mut tree);
        tree
    }

    fn walk(&self, dir: &Path, level: usize, ancestors: &mut Vec<PathBuf>, tree: &mut String) {
        let name = directory_name(dir);

        if self.filter.is_ignored_dir(&name) {
            push_line(tree, level, &format!("{}/ {}", name, EXCLUDED_MARKER));
            return;
        }
        push_line(tree, level, &format!("{}/", name));
        ancestors.push(canonical_dir(dir));

        let (dirs, files): (Vec<ListedEntry>, Vec<ListedEntry>) =
            list_directory(dir).into_iter().partition(ListedEntry::is_dir);

        for sub in dirs {
            if self.filter.is_ignored_dir(&sub.name) {
                push_line(tree, level + 1, &format!("{}/ {}", sub.name, EXCLUDED_MARKER));
            } else if leads_to_cycle(ancestors, &sub) {
                debug!("Not descending into symlink cycle {}", sub.path.display());
                push_line(tree, level + 1, &format!("{}/", sub.name));
            } else {
                self.walk(&sub.path, level + 1, ancestors, tree);
            }
        }

        for file in files {
            if !self.filter.is_excluded_file(&file.name) {
                push_line(tree, level + 1, &file.name);
            }
        }

        ancestors.pop();
    }
}

fn push_line(tree: &mut String, level: usize, text: &str) {
    tree.push_str(&INDENT.repeat(level));
    if level > 0 {
        tree.push_str(BRANCH);
    }
    tree.push_str(text);
    tree.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_render_nested_tree() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("proj");
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("node_modules").join("pkg")).unwrap();
        File::create(root.join("node_modules").join("pkg").join("index.js")).unwrap();
        File::create(root.join("src").join("main.rs")).unwrap();
        File::create(root.join("b.md")).unwrap();
        File::create(root.join("a.py")).unwrap();
        File::create(root.join("notes.txt")).unwrap();
        File::create(root.join("package.json")).unwrap();

        let config = Config::new(&root);
        let tree = TreeRenderer::new(&config).render(&root);

        let expected = "\
proj/
│   ├── node_modules/ [EXCLUDED]
│   ├── src/
│   │   ├── main.rs
│   ├── a.py
│   ├── b.md
│   ├── notes.txt
";
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_ignored_root_collapses() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("build");
        fs::create_dir_all(root.join("inner")).unwrap();
        File::create(root.join("main.rs")).unwrap();

        let config = Config::new(&root);
        let tree = TreeRenderer::new(&config).render(&root);

        assert_eq!(tree, "build/ [EXCLUDED]\n");
    }

    #[test]
    fn test_replaced_ignore_set() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("app");
        fs::create_dir_all(root.join("node_modules")).unwrap();
        fs::create_dir_all(root.join("vendor")).unwrap();
        File::create(root.join("node_modules").join("lib.js")).unwrap();

        let mut config = Config::new(&root);
        config.ignore_dirs = ["vendor".to_string()].into_iter().collect();
        let tree = TreeRenderer::new(&config).render(&root);

        assert!(tree.contains("│   ├── node_modules/\n"));
        assert!(tree.contains("│   │   ├── lib.js\n"));
        assert!(tree.contains("│   ├── vendor/ [EXCLUDED]\n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_mutual_symlinks_terminate() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("ring");
        fs::create_dir_all(root.join("a")).unwrap();
        fs::create_dir_all(root.join("b")).unwrap();
        File::create(root.join("a").join("x.rs")).unwrap();
        std::os::unix::fs::symlink(root.join("b"), root.join("a").join("to_b")).unwrap();
        std::os::unix::fs::symlink(root.join("a"), root.join("b").join("to_a")).unwrap();

        let config = Config::new(&root);
        let tree = TreeRenderer::new(&config).render(&root);

        let expected = "\
ring/
│   ├── a/
│   │   ├── to_b/
│   │   │   ├── to_a/
│   │   ├── x.rs
│   ├── b/
│   │   ├── to_a/
│   │   │   ├── to_b/
│   │   │   ├── x.rs
";
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("empty");
        fs::create_dir(&root).unwrap();

        let config = Config::new(&root);
        assert_eq!(TreeRenderer::new(&config).render(&root), "empty/\n");
    }
}
