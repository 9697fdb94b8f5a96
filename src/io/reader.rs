//! PDF loading and input path checks.

use lopdf::Document;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use crate::error::{PdfImgError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Number of pages in the document.
    pub page_count: usize,
}

/// Reads PDF documents from disk.
pub struct PdfReader;

impl PdfReader {
    /// Load a PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist, is not a regular file, or
    /// cannot be parsed as a PDF.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<LoadedPdf> {
        let path = path.as_ref();
        Self::check_file_exists(path)?;

        let start = Instant::now();
        let document = Document::load(path)
            .map_err(|err| PdfImgError::failed_to_load_pdf(path.to_path_buf(), err.to_string()))?;
        let load_time = start.elapsed();

        let page_count = document.get_pages().len();
        debug!(path = %path.display(), page_count, ?load_time, "loaded PDF");

        Ok(LoadedPdf {
            document,
            page_count,
        })
    }

    /// Ensure `path` exists and is not a directory.
    pub fn check_file_exists<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.try_exists()? {
            return Err(PdfImgError::file_not_found(path.to_path_buf()));
        }

        if path.is_dir() {
            return Err(PdfImgError::not_a_file(path.to_path_buf()));
        }

        Ok(())
    }

    /// Ensure `path` exists and is a directory.
    pub fn check_dir_exists<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.try_exists()? {
            return Err(PdfImgError::file_not_found(path.to_path_buf()));
        }

        if !path.is_dir() {
            return Err(PdfImgError::not_a_directory(path.to_path_buf()));
        }

        Ok(())
    }
}
