/*!
 * DocDump - Export directory contents into a single annotated text file
 *
 * This library walks a directory tree, reads every regular file with a
 * UTF-8/GBK fallback chain, and writes one annotated record per file into
 * a single consolidated text report. Unreadable files are recorded in
 * place instead of aborting the run.
 */

pub mod config;
pub mod encoding;
pub mod error;
pub mod exporter;
pub mod report;
pub mod scanner;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{ExportError, Result};
pub use exporter::Exporter;
pub use report::{ExportReport, FailureInfo, ReportFormat, Reporter};
pub use scanner::Scanner;
pub use types::{FileBody, FileEntry, FileRecord};
pub use writer::ReportWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
