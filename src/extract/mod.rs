//! Extracting embedded JPEG images from a PDF.
//!
//! Every page's `/XObject` resources are scanned for image streams. Images
//! compressed with `DCTDecode` are plain JPEG files and are written out byte
//! for byte. `FlateDecode` images are recognised but not converted; see
//! [`export_png`]. Anything else is skipped.

pub mod extractor;
pub mod filter;

pub use extractor::{
    ExtractStatistics, ImageExtractor, PageImage, PngMetadata, export_png, page_images,
};
pub use filter::{ImageExport, ImageFilter, SkipReason};

use std::path::Path;

use crate::Result;
use crate::output::{OutputFormatter, display_extract_summary};

/// Extract the images of the PDF at `input` into `output_dir`.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created, the PDF is
/// missing or malformed, or an image file cannot be written.
pub fn extract_images_from_pdf(
    input: &Path,
    output_dir: &Path,
    formatter: &OutputFormatter,
) -> Result<ExtractStatistics> {
    let stats = ImageExtractor::new(output_dir).extract(input, formatter)?;
    display_extract_summary(formatter, &stats, output_dir);
    Ok(stats)
}
