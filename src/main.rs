//! CLI entry point for converting images to pixel art

use clap::Parser;
use pixelart::io::cli::{Cli, FileProcessor};
use pixelart::io::logger::ProgressLogger;

fn main() -> pixelart::Result<()> {
    let cli = Cli::parse();
    let level = cli.log_level();
    let mut processor = FileProcessor::new(cli);
    ProgressLogger::install(level, processor.multi_progress());
    processor.process().map(|_| ())
}
