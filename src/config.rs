/*!
 * Configuration handling for fullcode
 */

use std::collections::{BTreeSet, HashSet};
use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::utils::{
    default_output_file_name, normalize_relative, self_file_names, split_list,
    DEFAULT_EXCLUDED_FILES, DEFAULT_EXTENSIONS, DEFAULT_IGNORE_DIRS,
};

/// Command-line arguments for fullcode
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "fullcode",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregate a source tree into a single text snapshot for LLM context",
    long_about = "Walks a directory, keeps files with programming-related extensions and writes their contents, prefixed by an ASCII directory tree, to one text file or to the clipboard."
)]
pub struct Args {
    /// Copy the snapshot to the clipboard instead of writing a file
    #[clap(short = 'c', long)]
    pub clipboard: bool,

    /// Directory to process (defaults to the current directory)
    #[clap(short = 'd', long)]
    pub directory: Option<PathBuf>,

    /// Output file name (defaults to <cwd-name>-fullcode.txt)
    #[clap(short = 'o', long)]
    pub output_file: Option<PathBuf>,

    /// Comma-separated relative paths; when given only these files are aggregated
    #[clap(short = 'i', long, value_delimiter = ',')]
    pub include_files: Vec<String>,

    /// Comma-separated extensions replacing the default allow-list
    #[clap(short = 'x', long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Comma-separated directory names replacing the default ignore list
    #[clap(short = 'e', long, value_delimiter = ',')]
    pub exclude_dirs: Vec<String>,

    /// Comma-separated extensions to skip even if allowed
    #[clap(short = 'X', long, value_delimiter = ',')]
    pub exclude_extensions: Vec<String>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

impl Args {
    /// Excluded extensions in the order given, without blanks or repeats
    pub fn excluded_extensions(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        split_list(&self.exclude_extensions)
            .into_iter()
            .filter(|ext| seen.insert(ext.clone()))
            .collect()
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to process
    pub target_dir: PathBuf,

    /// Output file path (unused when copying to the clipboard)
    pub output_file: PathBuf,

    /// Copy output to clipboard
    pub clipboard: bool,

    /// Relative paths to aggregate exclusively (if empty, include all)
    pub include_files: HashSet<PathBuf>,

    /// Extension allow-list
    pub extensions: BTreeSet<String>,

    /// Extension deny-list
    pub exclude_extensions: BTreeSet<String>,

    /// Directory names skipped with their subtree
    pub ignore_dirs: BTreeSet<String>,

    /// File names never rendered nor aggregated
    pub excluded_files: BTreeSet<String>,
}

impl Config {
    /// Default configuration for a root directory, writing next to the working directory
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        let output_file = env::current_dir()
            .map(|cwd| PathBuf::from(default_output_file_name(&cwd)))
            .unwrap_or_else(|_| PathBuf::from(default_output_file_name(Path::new("."))));

        Self::with_output(target_dir.into(), output_file)
    }

    fn with_output(target_dir: PathBuf, output_file: PathBuf) -> Self {
        let mut excluded_files: BTreeSet<String> = DEFAULT_EXCLUDED_FILES
            .iter()
            .map(|s| s.to_string())
            .chain(self_file_names())
            .collect();
        if let Some(name) = output_file.file_name() {
            excluded_files.insert(name.to_string_lossy().to_string());
        }

        Self {
            target_dir,
            output_file,
            clipboard: false,
            include_files: HashSet::new(),
            extensions: normalize_extensions(DEFAULT_EXTENSIONS.iter()),
            exclude_extensions: BTreeSet::new(),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect(),
            excluded_files,
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let cwd = env::current_dir()?;
        Ok(Self::from_args_in(args, &cwd))
    }

    /// Create configuration from command-line arguments relative to a working directory
    pub fn from_args_in(args: Args, cwd: &Path) -> Self {
        let target_dir = args.directory.unwrap_or_else(|| cwd.to_path_buf());
        let output_file = args
            .output_file
            .unwrap_or_else(|| PathBuf::from(default_output_file_name(cwd)));

        let mut config = Self::with_output(target_dir, output_file);
        config.clipboard = args.clipboard;

        config.include_files = split_list(&args.include_files)
            .iter()
            .map(|p| normalize_relative(Path::new(p)))
            .collect();

        let extensions = split_list(&args.extensions);
        if !extensions.is_empty() {
            config.extensions = normalize_extensions(extensions.iter());
        }

        let exclude_dirs = split_list(&args.exclude_dirs);
        if !exclude_dirs.is_empty() {
            config.ignore_dirs = exclude_dirs.into_iter().collect();
        }

        config.exclude_extensions = normalize_extensions(split_list(&args.exclude_extensions).iter());

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            PathNotFound,
            "{}",
            self.target_dir.display()
        );
        Ok(())
    }
}

/// Lower-case dotted extension entries; literal file names keep their case
fn normalize_extensions<I, S>(entries: I) -> BTreeSet<String>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .map(|e| {
            let e = e.as_ref();
            if e.starts_with('.') {
                e.to_lowercase()
            } else {
                e.to_string()
            }
        })
        .collect()
}
