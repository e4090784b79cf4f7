/*!
 * Utility functions and built-in defaults for fullcode
 */

use std::path::{Component, Path, PathBuf};

use once_cell::sync::Lazy;

/// Suffix appended to the working directory name for the default output file
pub const OUTPUT_SUFFIX: &str = "-fullcode.txt";

/// Default extensions (and literal file names) eligible for aggregation
pub static DEFAULT_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // General programming languages
        ".py", ".java", ".c", ".cpp", ".h", ".hpp", ".cs", ".vb", ".r", ".rb", ".go", ".php",
        ".swift", ".kt", ".rs", ".scala", ".pl", ".lua", ".jl",
        // Web
        ".js", ".jsx", ".ts", ".tsx", ".html", ".css", ".scss", ".less", ".sass",
        // Shell & automation
        ".sh", ".zsh", ".fish", ".ps1", ".bat", ".cmd",
        // Database & query languages
        ".sql", ".psql", ".db", ".sqlite",
        // Markup & config
        ".xml", ".json", ".toml", ".ini", ".yml", ".yaml", ".md", ".rst",
        // Build systems
        "Makefile", ".gradle", ".cmake", ".ninja",
        // Other
        ".pqm", ".pq",
    ]
});

/// Default directory names skipped together with their whole subtree
pub static DEFAULT_IGNORE_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "venv",
        ".venv",
        "node_modules",
        "__pycache__",
        ".git",
        "dist",
        "build",
        "temp",
        "old_files",
        "flask_session",
    ]
});

/// File names never rendered nor aggregated, besides the tool itself
pub static DEFAULT_EXCLUDED_FILES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["package-lock.json", "package.json", "temp.py"]);

/// Names under which this tool's own executable may appear in a tree
pub fn self_file_names() -> Vec<String> {
    let name = env!("CARGO_PKG_NAME");
    let mut names = vec![name.to_string()];
    let suffix = std::env::consts::EXE_SUFFIX;
    if !suffix.is_empty() {
        names.push(format!("{}{}", name, suffix));
    }
    names
}

/// Lower-cased extension of a base name including the leading dot
///
/// Mirrors the usual `extname` rules: `.bashrc` has no extension,
/// `archive.tar.gz` yields `.gz` and a trailing dot yields `.`.
pub fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(0) | None => String::new(),
        Some(pos) => name[pos..].to_lowercase(),
    }
}

/// Split the values of a comma-separated flag into trimmed, non-empty items
pub fn split_list<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .flat_map(|v| v.as_ref().split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lexically normalize a relative path: drop `.` segments and resolve `..`
pub fn normalize_relative(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Default output file name derived from a working directory
pub fn default_output_file_name(cwd: &Path) -> String {
    let base = cwd
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "root".to_string());
    format!("{}{}", base, OUTPUT_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("main.rs"), ".rs");
        assert_eq!(extension_of("Script.PY"), ".py");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("Makefile"), "");
        assert_eq!(extension_of(".bashrc"), "");
        assert_eq!(extension_of("weird."), ".");
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list(&[".py, .rs", "", " ,.md"]),
            vec![".py".to_string(), ".rs".to_string(), ".md".to_string()]
        );
        assert!(split_list::<&str>(&[]).is_empty());
        assert!(split_list(&[" , "]).is_empty());
    }

    #[test]
    fn test_normalize_relative() {
        assert_eq!(
            normalize_relative(Path::new("./src/./lib.rs")),
            PathBuf::from("src/lib.rs")
        );
        assert_eq!(
            normalize_relative(Path::new("src/util/../lib.rs")),
            PathBuf::from("src/lib.rs")
        );
    }

    #[test]
    fn test_default_output_file_name() {
        assert_eq!(
            default_output_file_name(Path::new("/home/me/project")),
            "project-fullcode.txt"
        );
        assert_eq!(default_output_file_name(Path::new("/")), "root-fullcode.txt");
    }

    #[test]
    fn test_defaults_contain_expected_entries() {
        assert!(DEFAULT_EXTENSIONS.contains(&".py"));
        assert!(DEFAULT_EXTENSIONS.contains(&"Makefile"));
        assert!(DEFAULT_IGNORE_DIRS.contains(&"node_modules"));
        assert!(DEFAULT_EXCLUDED_FILES.contains(&"package-lock.json"));
        assert!(self_file_names().contains(&"fullcode".to_string()));
    }
}
