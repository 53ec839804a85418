/*!
 * Configuration handling for DocDump
 */

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::error::{ExportError, Result};

/// Command-line arguments for DocDump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "docdump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Export directory contents into a single annotated text file",
    long_about = "Walks a directory tree, reads every file with a UTF-8/GBK fallback chain, and writes one annotated record per file into a single consolidated text report."
)]
pub struct Args {
    /// Directory to export
    #[clap(default_value = "src")]
    pub directory_path: String,

    /// Output text file name
    #[clap(default_value = "output.txt")]
    pub output_file: String,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to export
    pub target_dir: PathBuf,

    /// Output text file path
    pub output_file: PathBuf,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory_path),
            output_file: PathBuf::from(args.output_file),
        }
    }

    /// Validate the configuration
    ///
    /// Pre-flight checks only: the output file is neither created nor
    /// truncated here.
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.exists() {
            return Err(ExportError::TargetNotFound(self.target_dir.clone()));
        }

        if !self.target_dir.is_dir() {
            return Err(ExportError::NotADirectory(self.target_dir.clone()));
        }

        // Check if output file directory exists and is writable
        if let Some(parent) = self.output_file.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(ExportError::OutputDirNotFound(parent.to_path_buf()));
            }
        }

        Ok(())
    }
}
