/*!
 * Export orchestration: traversal, per-file reads, output, summary
 */

use std::sync::Arc;
use std::time::Instant;

use indicatif::ProgressBar;

use crate::config::Config;
use crate::error::{ExportError, Result};
use crate::report::{ExportReport, FailureInfo};
use crate::scanner::Scanner;
use crate::types::FileBody;
use crate::writer::ReportWriter;

/// Exporter for directory contents
pub struct Exporter {
    /// Exporter configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Exporter {
    /// Create a new exporter
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Run the full export
    ///
    /// Pre-flight failures abort before the output file is touched.
    /// Per-file read failures are recorded in the output instead of
    /// stopping the run.
    pub fn run(&self) -> Result<ExportReport> {
        self.config.validate()?;

        let start = Instant::now();
        let scanner = Scanner::new(self.config.clone());
        let entries = scanner.discover()?;

        if entries.is_empty() {
            return Err(ExportError::NoFilesFound(self.config.target_dir.clone()));
        }

        self.progress.set_length(entries.len() as u64);

        let mut records = Vec::with_capacity(entries.len());
        let mut failures = Vec::new();
        let mut total_lines = 0;
        let mut total_chars = 0;

        for entry in &entries {
            self.progress.set_message(entry.name.clone());
            let record = scanner.read_entry(entry);

            match &record.body {
                FileBody::Text(content) => {
                    total_lines += content.lines().count();
                    total_chars += content.chars().count();
                    self.progress.println(format!("processed: {}", record.path));
                }
                FileBody::Unreadable(reason) => {
                    failures.push(FailureInfo {
                        path: record.path.clone(),
                        error: reason.clone(),
                    });
                    self.progress
                        .println(format!("failed: {} - {}", record.path, reason));
                }
            }

            self.progress.inc(1);
            records.push(record);
        }

        let writer = ReportWriter::new(self.config.clone());
        writer.write(&records)?;

        Ok(ExportReport {
            output_file: self.config.output_file.display().to_string(),
            duration: start.elapsed(),
            files_processed: records.len(),
            files_failed: failures.len(),
            total_lines,
            total_chars,
            failures,
        })
    }
}
