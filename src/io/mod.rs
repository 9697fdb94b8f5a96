//! File input and output.
//!
//! [`PdfReader`] loads existing PDFs and checks input paths; [`PdfWriter`]
//! serializes a finished document to disk.

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteStatistics};
