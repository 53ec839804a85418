/*!
 * Reporting functionality for DocDump
 *
 * Provides functionality for generating formatted reports of export results
 * using the tabled library for clean, consistent table rendering.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

/// A file that could not be read, with its error description
#[derive(Debug, Clone)]
pub struct FailureInfo {
    /// Full path of the file
    pub path: String,
    /// Error description recorded in its place
    pub error: String,
}

/// Statistics for a completed export
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to export
    pub duration: Duration,
    /// Number of records written (readable and unreadable alike)
    pub files_processed: usize,
    /// Number of files recorded as unreadable
    pub files_failed: usize,
    /// Total number of lines across decoded files
    pub total_lines: usize,
    /// Total number of characters across decoded files
    pub total_chars: usize,
    /// Details for each unreadable file
    pub failures: Vec<FailureInfo>,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
}

/// Report generator for export results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string based on export statistics
    pub fn generate_report(&self, report: &ExportReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ExportReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Truncate a path for display, keeping the tail segments
    fn format_path(&self, path: &str, max_len: usize) -> String {
        let count = path.chars().count();
        if count <= max_len {
            return path.to_string();
        }

        let skip = count - (max_len - 3);
        let tail: String = path.chars().skip(skip).collect();
        format!("...{}", tail)
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &ExportReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Processed".to_string(),
                value: self.format_number(report.files_processed),
            },
            SummaryRow {
                key: "⚠️ Failed Files".to_string(),
                value: self.format_number(report.files_failed),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(report.total_lines),
            },
            SummaryRow {
                key: "🔤 Total Characters".to_string(),
                value: self.format_number(report.total_chars),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create a table of unreadable files using the tabled crate
    fn create_failures_table(&self, report: &ExportReport) -> String {
        #[derive(Tabled)]
        struct FailureRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Error")]
            error: String,
        }

        let rows: Vec<FailureRow> = report
            .failures
            .iter()
            .map(|failure| FailureRow {
                path: self.format_path(&failure.path, 60),
                error: failure.error.clone(),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &ExportReport) -> String {
        let summary_table = self.create_summary_table(report);

        if report.failures.is_empty() {
            format!("✅  EXPORT COMPLETE\n{}", summary_table)
        } else {
            format!(
                "⚠️  UNREADABLE FILES\n{}\n\n✅  EXPORT COMPLETE\n{}",
                self.create_failures_table(report),
                summary_table
            )
        }
    }
}
