//! Utilities for input collection and display helpers.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{Result, error::PdfImgError};

/// File name patterns accepted as JPEG input. Matched case-insensitively.
const JPEG_PATTERNS: &[&str] = &["*.jpg", "*.jpeg"];

/// Collect the JPEG files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into.
///
/// Errors:
/// - Propagates filesystem errors from the directory walk.
pub fn collect_jpeg_paths<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let matcher = jpeg_matcher()?;
    let mut resolved_paths = Vec::new();

    for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.path().is_file() && matcher.is_match(entry.file_name()) {
            resolved_paths.push(entry.into_path());
        }
    }

    resolved_paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(resolved_paths)
}

fn jpeg_matcher() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in JPEG_PATTERNS {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|err| PdfImgError::Other {
                message: err.to_string(),
            })?;
        builder.add(glob);
    }

    builder.build().map_err(|err| PdfImgError::Other {
        message: err.to_string(),
    })
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
