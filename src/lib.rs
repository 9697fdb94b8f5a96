//! pdfimg - Merge JPEG images into a PDF and extract them again.
//!
//! Two operations are provided:
//!
//! - **merge**: every `.jpg`/`.jpeg` file directly inside a directory becomes
//!   one A4 page, in file name order, scaled to fit and centred.
//! - **extract**: every `DCTDecode` image referenced from a PDF's pages is
//!   written out unchanged as `Image<n>.jpeg`.
//!
//! # Examples
//!
//! ```no_run
//! use pdfimg::merge::merge_images_to_pdf;
//! use pdfimg::extract::extract_images_from_pdf;
//! use pdfimg::output::OutputFormatter;
//! use std::path::Path;
//!
//! # fn example() -> pdfimg::Result<()> {
//! let formatter = OutputFormatter::default();
//! merge_images_to_pdf(Path::new("photos"), Path::new("album.pdf"), &formatter)?;
//!
//! let stats = extract_images_from_pdf(Path::new("album.pdf"), Path::new("out"), &formatter)?;
//! println!("Extracted {} images", stats.images_exported);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod io;
pub mod merge;
pub mod output;
pub mod utils;

pub use error::{PdfImgError, Result};

use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use tracing::debug;

use crate::cli::{Cli, print_usage};
use crate::config::{Config, Operation};
use crate::output::OutputFormatter;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the command line with the process arguments.
///
/// # Errors
///
/// Returns the error of the selected operation. Argument problems and
/// unknown operations are reported on stdout and are not errors.
pub fn run() -> Result<()> {
    run_from(std::env::args_os())
}

/// Run the command line with explicit arguments, the first being the
/// program name.
///
/// # Errors
///
/// See [`run`].
pub fn run_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(err) => {
            debug!(kind = ?err.kind(), "invalid arguments");
            print_usage();
            return Ok(());
        }
    };

    let config = match Config::try_from(&cli) {
        Ok(config) => config,
        Err(PdfImgError::UnknownOperation { name }) => {
            println!("Unknown operation: {name}");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    execute(&config)
}

/// Run the operation selected by `config`.
///
/// # Errors
///
/// Returns the error of the operation.
pub fn execute(config: &Config) -> Result<()> {
    let formatter = OutputFormatter::from_config(config);
    debug!(operation = config.operation.as_str(), input = %config.input.display(), output = %config.output.display(), "starting");

    match config.operation {
        Operation::Merge => {
            merge::merge_images_to_pdf(&config.input, &config.output, &formatter)?;
        }
        Operation::Extract => {
            extract::extract_images_from_pdf(&config.input, &config.output, &formatter)?;
        }
    }

    Ok(())
}
