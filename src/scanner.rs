/*!
 * Directory traversal and per-file reading
 */

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;
use crate::encoding::{decode_text, encoding_names};
use crate::error::Result;
use crate::types::{FileBody, FileEntry, FileRecord};

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Enumerate every regular file under the target directory
    ///
    /// Directories and non-regular entries are descended into but excluded
    /// from the result. Entries are sorted by the string form of their full
    /// path so repeated runs over an unchanged tree visit files in the same
    /// order.
    pub fn discover(&self) -> Result<Vec<FileEntry>> {
        let root = fs::canonicalize(&self.config.target_dir)?;
        let mut entries = Vec::new();

        for entry in WalkDir::new(&root) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    entries.push(FileEntry::from_path(entry.into_path()));
                }
                Ok(_) => {}
                Err(err) => eprintln!("warning: skipping unreadable entry: {}", err),
            }
        }

        entries.sort_by_key(|entry| path_sort_key(&entry.path));

        Ok(entries)
    }

    /// Read one file and convert it into its output record
    ///
    /// Never fails: any read or decode problem becomes an unreadable record
    /// body so one bad file cannot abort the batch.
    pub fn read_entry(&self, entry: &FileEntry) -> FileRecord {
        let body = match fs::read(&entry.path) {
            Ok(bytes) => match decode_text(&bytes) {
                Some((text, _encoding)) => FileBody::Text(text),
                None => FileBody::Unreadable(format!(
                    "invalid text encoding (tried {})",
                    encoding_names().join(", ")
                )),
            },
            Err(err) => FileBody::Unreadable(err.to_string()),
        };

        FileRecord {
            path: entry.path.display().to_string(),
            name: entry.name.clone(),
            body,
        }
    }
}

/// Platform-independent sort key: the full path with `/` separators
fn path_sort_key(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
