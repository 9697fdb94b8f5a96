//! PDF writing.
//!
//! Documents are compressed, renumbered, and written to a temporary sibling
//! file which is then renamed over the destination, so an interrupted write
//! never leaves a truncated PDF behind.

use lopdf::Document;
use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

use crate::error::{PdfImgError, Result};
use crate::utils::format_file_size;

const BUFFER_SIZE: usize = 8192;

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Size of the written file in bytes.
    pub file_size: u64,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// Writes PDF documents to disk.
pub struct PdfWriter;

impl PdfWriter {
    /// Write `doc` to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the file
    /// cannot be created, or serialization fails.
    pub fn save(doc: &mut Document, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| {
                PdfImgError::FailedToCreateDirectory {
                    path: parent.to_path_buf(),
                    source,
                }
            })?;
        }

        doc.compress();
        doc.renumber_objects();

        let temp_path = temp_path_for(path);
        if let Err(err) = Self::write_to(doc, &temp_path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(err);
        }

        std::fs::rename(&temp_path, path).map_err(|source| PdfImgError::FailedToWrite {
            path: path.to_path_buf(),
            source,
        })?;

        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let write_time = start.elapsed();
        debug!(path = %path.display(), file_size, ?write_time, "wrote PDF");

        Ok(WriteStatistics { file_size })
    }

    fn write_to(doc: &mut Document, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|source| {
            PdfImgError::FailedToCreateOutput {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let mut writer = BufWriter::with_capacity(BUFFER_SIZE, file);
        doc.save_to(&mut writer)
            .map_err(|err| PdfImgError::FailedToWrite {
                path: path.to_path_buf(),
                source: std::io::Error::other(err),
            })?;

        writer.flush().map_err(|source| PdfImgError::FailedToWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `out.pdf` -> `out.pdf.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}
