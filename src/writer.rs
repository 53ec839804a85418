/*!
 * Text report writer implementation for DocDump
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::config::Config;
use crate::types::{FileBody, FileRecord};

/// Width of the `=` separator line between records
pub const SEPARATOR_WIDTH: usize = 80;

/// Writer for the consolidated text report
pub struct ReportWriter {
    /// Writer configuration
    config: Config,
}

impl ReportWriter {
    /// Create a new report writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write all records to the output file in order
    ///
    /// The output file is opened once, truncating any prior content, and
    /// flushed before the call returns.
    pub fn write(&self, records: &[FileRecord]) -> io::Result<()> {
        let file = File::create(&self.config.output_file)?;
        let mut out = BufWriter::new(file);
        let separator = "=".repeat(SEPARATOR_WIDTH);

        for record in records {
            self.write_record(&mut out, record, &separator)?;
        }

        out.flush()
    }

    /// Write a single record block
    fn write_record<W: Write>(
        &self,
        out: &mut W,
        record: &FileRecord,
        separator: &str,
    ) -> io::Result<()> {
        writeln!(out, "文件路径：{}", record.path)?;
        writeln!(out, "文件名：{}", record.name)?;
        writeln!(out, "文件详情：")?;

        match &record.body {
            FileBody::Text(content) => out.write_all(content.as_bytes())?,
            FileBody::Unreadable(reason) => write!(out, "读取失败：{}", reason)?,
        }

        write!(out, "\n{}\n\n", separator)
    }
}
