/*!
 * Output delivery for fullcode: a file on disk or the system clipboard
 */

use std::fmt;
use std::io::Write;
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use crate::clipboard;
use crate::config::Config;
use crate::error::{FullcodeError, Result};

/// Where a snapshot ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Written to the named file
    File(String),
    /// Handed to the platform clipboard
    Clipboard,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(name) => write!(f, "{}", name),
            Self::Clipboard => write!(f, "clipboard"),
        }
    }
}

/// Delivers snapshot text to the configured destination
pub struct OutputWriter {
    /// Writer configuration
    config: Config,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Deliver the text to the clipboard or the output file
    pub fn write(&self, text: &str) -> Result<Destination> {
        if self.config.clipboard {
            clipboard::copy_to_clipboard(text)?;
            info!("Copied {} bytes to the clipboard", text.len());
            return Ok(Destination::Clipboard);
        }

        write_atomic(&self.config.output_file, text)?;
        info!("Wrote {} bytes to {}", text.len(), self.config.output_file.display());
        Ok(Destination::File(self.config.output_file.display().to_string()))
    }
}

/// Write UTF-8 text to `path`, replacing any existing file only once the write succeeded
pub fn write_atomic(path: &Path, text: &str) -> Result<()> {
    let writer_error = |source| FullcodeError::Writer {
        path: path.display().to_string(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(writer_error)?;
    temp.write_all(text.as_bytes()).map_err(writer_error)?;
    temp.flush().map_err(writer_error)?;
    temp.persist(path).map_err(|e| writer_error(e.error))?;

    Ok(())
}
