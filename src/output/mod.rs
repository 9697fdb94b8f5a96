//! Output formatting and run summaries.
//!
//! [`OutputFormatter`] prints the console messages; the `*_summary`
//! functions turn operation statistics into the closing report.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use std::path::Path;

use crate::extract::ExtractStatistics;
use crate::merge::MergeStatistics;

/// Printed when a merge finds no JPEG files.
pub const NO_IMAGES_FOUND: &str = "No JPG files found in the specified directory.";

/// Printed when an extraction writes no files.
pub const NO_IMAGES_EXTRACTED: &str = "No extractable images found in the PDF file.";

/// Printed after [`NO_IMAGES_EXTRACTED`].
pub const EXTRACTOR_NOTE: &str =
    "Note: This basic extractor may not be able to extract all types of embedded images.";

/// Lines of the closing report of a merge run.
pub fn merge_summary(stats: &MergeStatistics, output: &Path) -> Vec<(MessageLevel, String)> {
    let mut lines = Vec::new();

    if stats.images_skipped > 0 {
        lines.push((
            MessageLevel::Warning,
            format!(
                "Skipped {} of {} image(s)",
                stats.images_skipped, stats.images_found
            ),
        ));
    }

    lines.push((
        MessageLevel::Info,
        format!("PDF created successfully at: {}", output.display()),
    ));
    lines.push((MessageLevel::Detail, format!("Pages: {}", stats.pages_added)));
    lines.push((
        MessageLevel::Detail,
        format!("Merge time: {:.2}s", stats.elapsed.as_secs_f64()),
    ));

    lines
}

/// Lines of the closing report of an extraction run.
pub fn extract_summary(stats: &ExtractStatistics, output_dir: &Path) -> Vec<(MessageLevel, String)> {
    let mut lines = Vec::new();

    if stats.images_exported == 0 {
        lines.push((MessageLevel::Info, NO_IMAGES_EXTRACTED.to_string()));
        lines.push((MessageLevel::Info, EXTRACTOR_NOTE.to_string()));
    } else {
        lines.push((
            MessageLevel::Info,
            format!(
                "Successfully extracted {} images to {}",
                stats.images_exported,
                output_dir.display()
            ),
        ));
    }

    for (label, value) in [
        ("Pages scanned", stats.pages_scanned),
        ("Image objects", stats.images_seen),
        ("Skipped (Flate)", stats.skipped_flate),
        ("Skipped (other)", stats.skipped_other),
    ] {
        lines.push((MessageLevel::Detail, format!("{label}: {value}")));
    }

    lines
}

/// Print the closing report of a merge run.
pub fn display_merge_summary(formatter: &OutputFormatter, stats: &MergeStatistics, output: &Path) {
    for (level, line) in merge_summary(stats, output) {
        formatter.emit(level, &line);
    }
}

/// Print the closing report of an extraction run.
pub fn display_extract_summary(
    formatter: &OutputFormatter,
    stats: &ExtractStatistics,
    output_dir: &Path,
) {
    for (level, line) in extract_summary(stats, output_dir) {
        formatter.emit(level, &line);
    }
}
