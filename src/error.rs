//! Global error handling for docdump
//!
//! Pre-flight validation failures are fatal and abort the run before the
//! output file is touched. Per-file read problems are deliberately NOT
//! represented here; they become `FileBody::Unreadable` records instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for docdump operations
#[derive(Error, Debug)]
pub enum ExportError {
    /// Target directory does not exist
    #[error("target directory not found: {}", .0.display())]
    TargetNotFound(PathBuf),

    /// Target path exists but is not a directory
    #[error("target path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Parent directory of the output file does not exist
    #[error("output directory not found: {}", .0.display())]
    OutputDirNotFound(PathBuf),

    /// Target directory contains no regular files
    #[error("no files found under directory: {}", .0.display())]
    NoFilesFound(PathBuf),

    /// File system errors (traversal or output stream)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for docdump operations
pub type Result<T> = std::result::Result<T, ExportError>;
