//! Turning a directory of JPEG files into a document.

use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::builder::ImagePdfBuilder;
use super::layout::PageSize;
use super::source::{ImageSource, display_name};
use crate::Result;
use crate::io::PdfReader;
use crate::output::OutputFormatter;
use crate::utils::collect_jpeg_paths;

/// Counters for one merge run.
#[derive(Debug, Clone, Default)]
pub struct MergeStatistics {
    /// JPEG files found in the input directory.
    pub images_found: usize,
    /// Pages written to the document.
    pub pages_added: usize,
    /// Files that failed to load and were left out.
    pub images_skipped: usize,
    /// Time spent loading images and building the document.
    pub elapsed: Duration,
}

/// The result of building a document from an image directory.
#[derive(Debug)]
#[expect(clippy::large_enum_variant)]
pub enum MergeResult {
    /// The directory held no JPEG files; nothing should be written.
    NoImages,
    /// The assembled document and its statistics.
    Document {
        /// The document, ready to be written.
        document: lopdf::Document,
        /// Counters for the run.
        statistics: MergeStatistics,
    },
}

/// Turns a directory of JPEG files into a PDF with one page per image.
#[derive(Debug, Clone, Default)]
pub struct ImageMerger {
    page_size: PageSize,
}

impl ImageMerger {
    /// Create a merger producing A4 pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from every JPEG directly inside `input_dir`.
    ///
    /// Images are placed in file name order. A file that cannot be loaded is
    /// reported through `formatter` and skipped; the remaining images are
    /// still merged.
    ///
    /// # Errors
    ///
    /// Returns an error if `input_dir` is missing or is not a directory, or
    /// if a page cannot be assembled.
    pub fn merge(&self, input_dir: &Path, formatter: &OutputFormatter) -> Result<MergeResult> {
        PdfReader::check_dir_exists(input_dir)?;

        let paths = collect_jpeg_paths(input_dir)?;
        if paths.is_empty() {
            info!(dir = %input_dir.display(), "no JPEG files found");
            return Ok(MergeResult::NoImages);
        }

        formatter.info(&format!("Merging {} JPG files...", paths.len()));

        let start = Instant::now();
        let mut builder = ImagePdfBuilder::new(self.page_size);
        let mut statistics = MergeStatistics {
            images_found: paths.len(),
            ..Default::default()
        };

        for (idx, path) in paths.iter().enumerate() {
            formatter.progress(idx + 1, paths.len(), &display_name(path));

            match ImageSource::load(path) {
                Ok(image) => {
                    builder.add_image_page(&image)?;
                }
                Err(err) if err.is_recoverable() => {
                    debug!(path = %path.display(), error = %err, "skipping image");
                    formatter.error(&format!(
                        "Error processing image {}: {err}",
                        path.display()
                    ));
                    statistics.images_skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        statistics.pages_added = builder.page_count();
        statistics.elapsed = start.elapsed();

        info!(
            pages = statistics.pages_added,
            skipped = statistics.images_skipped,
            "merge complete"
        );

        Ok(MergeResult::Document {
            document: builder.finish(),
            statistics,
        })
    }
}
