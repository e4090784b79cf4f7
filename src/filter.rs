/*!
 * File and directory filtering rules
 *
 * Every decision here is a pure function of the borrowed [`Config`], so the
 * tree renderer and the aggregator reach the same verdict for the same name.
 */

use std::collections::BTreeSet;
use std::path::{Component, Path};

use crate::config::Config;
use crate::utils::{extension_of, normalize_relative};

/// Filtering predicates over a configuration
#[derive(Debug, Clone, Copy)]
pub struct FileFilter<'a> {
    config: &'a Config,
}

impl<'a> FileFilter<'a> {
    /// Create a new filter
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Check if a directory name is in the ignore set
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.config.ignore_dirs.contains(name)
    }

    /// Check if a file name is in the hard exclusion set
    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.config.excluded_files.contains(name)
    }

    /// Check if a base name passes the extension allow-list and deny-list
    ///
    /// Entries without a leading dot (such as `Makefile`) match the whole name.
    pub fn is_programming_file(&self, name: &str) -> bool {
        matches_list(&self.config.extensions, name) && !self.is_denied(name)
    }

    /// Check if a base name is on the extension deny-list
    pub fn is_denied(&self, name: &str) -> bool {
        matches_list(&self.config.exclude_extensions, name)
    }

    /// Check if a relative path lies under an ignored directory or names an excluded file
    pub fn should_exclude(&self, relative: &Path) -> bool {
        let normalized = normalize_relative(relative);
        let segments: Vec<String> = normalized
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().to_string()),
                _ => None,
            })
            .collect();

        let Some((last, ancestors)) = segments.split_last() else {
            return false;
        };

        ancestors.iter().any(|dir| self.is_ignored_dir(dir)) || self.is_excluded_file(last)
    }

    /// Check if a path relative to the traversal root is in the inclusion set
    ///
    /// An empty inclusion set includes everything.
    pub fn should_include_file(&self, relative: &Path) -> bool {
        if self.config.include_files.is_empty() {
            return true;
        }
        self.config.include_files.contains(&normalize_relative(relative))
    }
}

/// Match a base name against dotted extensions, or against literal names for
/// entries without a leading dot. A dotfile such as `.py` has no extension.
fn matches_list(entries: &BTreeSet<String>, name: &str) -> bool {
    let ext = extension_of(name);
    if !ext.is_empty() && entries.contains(&ext) {
        return true;
    }
    !name.starts_with('.') && entries.contains(name)
}
