/*!
 * fullcode - Aggregate a source tree into a single text snapshot
 *
 * Renders an ASCII directory tree, then concatenates every file that passes
 * the extension, exclusion and inclusion rules behind a per-file header.
 * The result is meant to be pasted as context for Large Language Models.
 */

pub mod aggregator;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod report;
pub mod scanner;
pub mod tree;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use aggregator::{build_snapshot, Aggregator};
pub use config::{Args, Config};
pub use error::{FullcodeError, Result};
pub use filter::FileFilter;
pub use report::{ReportFormat, Reporter, RunReport};
pub use tree::TreeRenderer;
pub use types::{AggregateStatistics, EntryKind, FileReportInfo, ListedEntry, Snapshot};
pub use writer::{Destination, OutputWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
