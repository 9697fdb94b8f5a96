//! CLI argument parsing for pdfimg.
//!
//! The command line is `pdfimg <operation> <input_path> <output_path>`. The
//! operation is kept as a raw string here and resolved in
//! [`Config`](crate::config::Config) so an unknown name can be reported
//! instead of rejected by `clap`.

use clap::Parser;
use std::path::PathBuf;

/// Text printed when the positional arguments are missing or malformed.
pub const USAGE: &str = "Usage: pdfimg <operation> <input_path> <output_path>
Available operations:
  merge - Merge JPG images into a single PDF
  extract - Extract images from a PDF file";

/// Merge JPEG images into a PDF, or extract JPEG images from a PDF.
#[derive(Parser, Debug)]
#[command(name = "pdfimg")]
#[command(version)]
#[command(about = "Merge JPEG images into a PDF or extract them again", long_about = None)]
#[command(author)]
pub struct Cli {
    /// Operation to perform: merge or extract
    ///
    ///   merge   - INPUT is a directory of .jpg files, OUTPUT is the PDF to create
    ///   extract - INPUT is a PDF file, OUTPUT is the directory for extracted images
    #[arg(value_name = "OPERATION")]
    pub operation: String,

    /// Input path (image directory for merge, PDF file for extract)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path (PDF file for merge, directory for extract)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Verbose output - report every image processed or skipped
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Print the usage text to stdout.
pub fn print_usage() {
    println!("{USAGE}");
}
