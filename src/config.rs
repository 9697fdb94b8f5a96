//! Configuration module for pdfimg.
//!
//! This module turns parsed CLI arguments into a normalized [`Config`] that
//! drives the selected operation. It handles:
//! - Case-insensitive resolution of the operation name
//! - Conflicting output mode flags

use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::Cli;
use crate::error::{PdfImgError, Result};

/// Operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Merge a directory of JPEG images into one PDF.
    Merge,
    /// Extract embedded JPEG images from a PDF.
    Extract,
}

impl Operation {
    /// Name of the operation as typed on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Extract => "extract",
        }
    }
}

impl FromStr for Operation {
    type Err = PdfImgError;

    /// Parse an operation name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`PdfImgError::UnknownOperation`] with the lowercased name if it
    /// is neither `merge` nor `extract`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "merge" => Ok(Self::Merge),
            "extract" => Ok(Self::Extract),
            other => Err(PdfImgError::unknown_operation(other)),
        }
    }
}

/// Validated configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Operation to run.
    pub operation: Operation,

    /// Image directory (merge) or PDF file (extract).
    pub input: PathBuf,

    /// PDF file (merge) or image directory (extract).
    pub output: PathBuf,

    /// Report each processed item.
    pub verbose: bool,

    /// Suppress non-error output.
    pub quiet: bool,
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if quiet and verbose are both set or a path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.quiet && self.verbose {
            return Err(PdfImgError::invalid_config(
                "Cannot use both --quiet and --verbose",
            ));
        }

        if self.input.as_os_str().is_empty() {
            return Err(PdfImgError::invalid_config("Input path cannot be empty"));
        }

        if self.output.as_os_str().is_empty() {
            return Err(PdfImgError::invalid_config("Output path cannot be empty"));
        }

        Ok(())
    }
}

impl TryFrom<&Cli> for Config {
    type Error = PdfImgError;

    fn try_from(cli: &Cli) -> Result<Self> {
        let config = Config {
            operation: cli.operation.parse()?,
            input: cli.input.clone(),
            output: cli.output.clone(),
            verbose: cli.verbose,
            quiet: cli.quiet,
        };

        config.validate()?;

        Ok(config)
    }
}
