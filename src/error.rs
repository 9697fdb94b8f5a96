//! Error types for pdfimg.
//!
//! Every fallible operation in the crate returns [`PdfImgError`]. Errors carry
//! the path they relate to so the top-level report can say which file failed.
//!
//! # Error Categories
//!
//! - **Configuration**: unknown operation, bad arguments
//! - **I/O**: missing directories, unwritable output
//! - **PDF**: input that `lopdf` cannot parse
//! - **Image**: per-file JPEG failures during a merge (recoverable)

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfimg operations.
pub type Result<T> = std::result::Result<T, PdfImgError>;

/// Main error type for pdfimg operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfImgError {
    /// Input file or directory was not found.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that does not exist.
        path: PathBuf,
    },

    /// A directory was expected but something else was found.
    #[error("Not a directory: {}", path.display())]
    NotADirectory {
        /// Offending path.
        path: PathBuf,
    },

    /// A file was expected but something else was found.
    #[error("Not a file: {}", path.display())]
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },

    /// Failed to load or parse a PDF file.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason reported by the PDF library.
        reason: String,
    },

    /// An input image could not be read or is not a JPEG.
    #[error("{reason}")]
    InvalidImage {
        /// Path to the image file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Failed to build the output document.
    #[error("Failed to build PDF: {reason}")]
    FailedToBuildPdf {
        /// Description of the failure.
        reason: String,
    },

    /// Failed to create a directory.
    #[error("Failed to create directory: {}\n  Reason: {source}", path.display())]
    FailedToCreateDirectory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to create an output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write to an output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The requested operation is not one of the supported names.
    #[error("Unknown operation: {name}")]
    UnknownOperation {
        /// Operation name as given (lowercased).
        name: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what is wrong.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<walkdir::Error> for PdfImgError {
    fn from(err: walkdir::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl PdfImgError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotADirectory error.
    pub fn not_a_directory(path: PathBuf) -> Self {
        Self::NotADirectory { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an InvalidImage error.
    pub fn invalid_image(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            path,
            reason: reason.into(),
        }
    }

    /// Create a FailedToBuildPdf error.
    pub fn failed_to_build_pdf(reason: impl Into<String>) -> Self {
        Self::FailedToBuildPdf {
            reason: reason.into(),
        }
    }

    /// Create an UnknownOperation error.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Check if this error only affects a single input image.
    ///
    /// A merge reports recoverable errors and moves on to the next image.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidImage { .. })
    }
}
