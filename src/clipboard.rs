/*!
 * Clipboard support for fullcode
 *
 * Hands the snapshot to the platform clipboard command through its
 * standard input. Only macOS (`pbcopy`) and Windows (`clip`) are supported.
 */

use std::io::{self, Write};
use std::process::{Command, Stdio};

use log::debug;
use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The current platform has no supported clipboard command
    #[error("Clipboard copy is only supported on macOS and Windows 10+ (current platform: {0}).")]
    UnsupportedPlatform(String),

    /// Failed to execute the command
    #[error("Error copying to clipboard: {0}")]
    CommandFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Trait for clipboard operations
pub trait Clipboard {
    /// Copy text to the clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;
}

/// Available clipboard providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardProvider {
    /// macOS clipboard
    MacOS,
    /// Windows clipboard
    Windows,
}

impl ClipboardProvider {
    /// Select the provider for an operating system name as reported by `std::env::consts::OS`
    pub fn for_platform(os: &str) -> Result<Self> {
        match os {
            "macos" => Ok(Self::MacOS),
            "windows" => Ok(Self::Windows),
            other => Err(ClipboardError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Command line used by this provider
    pub fn command(&self) -> (&'static str, Vec<&'static str>) {
        match self {
            Self::MacOS => ("pbcopy", vec![]),
            Self::Windows => ("clip", vec![]),
        }
    }

    /// Bytes fed to the command's stdin; `clip` expects UTF-16LE
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Self::MacOS => text.as_bytes().to_vec(),
            Self::Windows => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }
}

impl Clipboard for ClipboardProvider {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let (cmd, args) = self.command();
        execute_clipboard_command(cmd, &args, &self.encode(text))
    }
}

//--------------------------------------------------------------------
// Public API
//--------------------------------------------------------------------

/// Copy text to the system clipboard of the current platform
///
/// # Returns
/// * `Ok(())` - If the text was successfully copied
/// * `Err(ClipboardError::UnsupportedPlatform)` - On platforms other than macOS and Windows
/// * `Err(ClipboardError::CommandFailed)` - If the clipboard command could not run or failed
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let provider = ClipboardProvider::for_platform(std::env::consts::OS)?;
    debug!("Copying {} bytes with {:?}", text.len(), provider);
    provider.copy_to_clipboard(text)
}

/// Execute a command, feeding `input` to its stdin, and wait for it to finish
pub fn execute_clipboard_command(cmd: &str, args: &[&str], input: &[u8]) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(format!("Failed to spawn {}: {}", cmd, e)))?;

    let mut stdin = child.stdin.take().ok_or_else(|| {
        ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd))
    })?;

    if let Err(e) = stdin.write_all(input) {
        drop(stdin);
        // The child is always reaped before returning
        let _ = child.kill();
        let _ = child.wait();
        return Err(ClipboardError::CommandFailed(format!(
            "Failed to write to {}: {}",
            cmd, e
        )));
    }
    drop(stdin);

    let status = child.wait()?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}
