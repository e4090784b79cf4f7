/*!
 * Core types and data structures for the fullcode application
 */

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Kind of a listed filesystem entry, resolved through symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory (or symlink to one)
    Directory,
    /// Anything that is not a directory
    File,
}

/// One child of a listed directory
#[derive(Debug, Clone)]
pub struct ListedEntry {
    /// Base name of the entry
    pub name: String,
    /// Full path (parent joined with name)
    pub path: PathBuf,
    /// Resolved entry kind
    pub kind: EntryKind,
    /// Whether the entry itself is a symbolic link
    pub is_symlink: bool,
}

impl ListedEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Per-file numbers collected while aggregating
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReportInfo {
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
}

/// Aggregation statistics
#[derive(Debug, Clone, Default)]
pub struct AggregateStatistics {
    /// Number of files appended to the snapshot (including failed reads)
    pub files_aggregated: usize,
    /// Number of files whose content could not be read
    pub read_errors: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each aggregated file, keyed by relative path
    pub file_details: BTreeMap<String, FileReportInfo>,
}

/// The assembled snapshot text and the statistics gathered while building it
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// `Directory Tree:` section followed by every file block
    pub text: String,
    /// Statistics of the aggregation pass
    pub statistics: AggregateStatistics,
}
