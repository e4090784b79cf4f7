/*!
 * Directory listing shared by the tree renderer and the aggregator
 */

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::types::{EntryKind, ListedEntry};

/// List the direct children of a directory, sorted by file name
///
/// Entries are classified by following symlinks. Children that cannot be
/// read or stat'ed are skipped; an unreadable directory lists as empty.
pub fn list_directory(dir: &Path) -> Vec<ListedEntry> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter_map(|entry| {
            let path = entry.path().to_path_buf();
            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    debug!("Skipping {}: {}", path.display(), e);
                    return None;
                }
            };
            let kind = if metadata.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            Some(ListedEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path,
                kind,
                is_symlink: entry.path_is_symlink(),
            })
        })
        .collect()
}

/// Canonical form of a directory, or the path itself when it cannot be resolved
pub fn canonical_dir(dir: &Path) -> PathBuf {
    fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}

/// Check if descending into a symlinked directory would revisit a directory on the current walk
///
/// `ancestors` holds the canonical paths of every directory from the root down
/// to the one being listed. Targets that cannot be resolved are never entered.
pub fn leads_to_cycle(ancestors: &[PathBuf], entry: &ListedEntry) -> bool {
    if !entry.is_symlink || !entry.is_dir() {
        return false;
    }

    match fs::canonicalize(&entry.path) {
        Ok(target) => ancestors.iter().any(|ancestor| *ancestor == target),
        Err(_) => true,
    }
}

/// Display name of a directory: its base name, or the path itself for roots like `/`
pub fn directory_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
