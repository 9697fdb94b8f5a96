//! Merging a directory of JPEG images into one PDF.
//!
//! [`ImageMerger`] collects and validates the images and assembles the
//! document; [`merge_images_to_pdf`] runs the whole operation including the
//! write and the console report.

pub mod builder;
pub mod layout;
pub mod merger;
pub mod source;

pub use builder::ImagePdfBuilder;
pub use layout::{PageSize, Placement};
pub use merger::{ImageMerger, MergeResult, MergeStatistics};
pub use source::{ColorSpace, ImageSource};

use std::path::Path;

use crate::Result;
use crate::io::PdfWriter;
use crate::output::{NO_IMAGES_FOUND, OutputFormatter, display_merge_summary};

/// Merge every JPEG in `input_dir` into a PDF at `output`.
///
/// Returns `None` when the directory holds no JPEG files, in which case no
/// output is created.
///
/// # Errors
///
/// Returns an error if the input directory is unusable or the PDF cannot be
/// written. Individual unreadable images are reported and skipped.
pub fn merge_images_to_pdf(
    input_dir: &Path,
    output: &Path,
    formatter: &OutputFormatter,
) -> Result<Option<MergeStatistics>> {
    match ImageMerger::new().merge(input_dir, formatter)? {
        MergeResult::NoImages => {
            formatter.info(NO_IMAGES_FOUND);
            Ok(None)
        }
        MergeResult::Document {
            mut document,
            statistics,
        } => {
            let write_stats = PdfWriter::save(&mut document, output)?;
            display_merge_summary(formatter, &statistics, output);
            formatter.detail("Output size", &write_stats.format_file_size());
            Ok(Some(statistics))
        }
    }
}
