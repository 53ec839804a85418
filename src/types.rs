/*!
 * Core types and data structures for the DocDump application
 */

use std::path::PathBuf;

/// A regular file discovered by traversal
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Absolute path of the file
    pub path: PathBuf,
    /// File name shown in the record header
    pub name: String,
}

impl FileEntry {
    /// Build an entry from an absolute path, deriving the display name
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Self { path, name }
    }
}

/// Outcome of reading one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileBody {
    /// Decoded text content
    Text(String),
    /// Description of why the file could not be read
    Unreadable(String),
}

/// One formatted block in the output file
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Full path string shown in the record header
    pub path: String,
    /// File name shown in the record header
    pub name: String,
    /// Record body
    pub body: FileBody,
}

impl FileRecord {
    /// Whether this record documents a read failure
    pub fn is_unreadable(&self) -> bool {
        matches!(self.body, FileBody::Unreadable(_))
    }
}
