/*!
 * Command-line interface for DocDump
 */

use std::io;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use docdump::config::{Args, Config};
use docdump::exporter::Exporter;
use docdump::report::{ReportFormat, Reporter};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit if requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let bin_name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, bin_name, &mut io::stdout());
        return;
    }

    // Create configuration
    let config = Config::from_args(args);

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("📄 Exporting");
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.target_dir.display()
    ));

    // Run the export
    let exporter = Exporter::new(config, Arc::new(progress.clone()));
    match exporter.run() {
        Ok(report) => {
            progress.finish_and_clear();

            // Create a reporter and print the report
            let reporter = Reporter::new(ReportFormat::ConsoleTable);
            reporter.print_report(&report);
        }
        Err(err) => {
            progress.finish_and_clear();
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}
