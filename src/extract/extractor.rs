//! Page scanning and image export.

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::filter::{ImageExport, ImageFilter, SkipReason};
use crate::error::{PdfImgError, Result};
use crate::io::PdfReader;
use crate::output::OutputFormatter;

/// Limit on `/Parent` hops when looking up inherited resources.
const MAX_TREE_DEPTH: usize = 64;

/// Counters for one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStatistics {
    /// Pages visited.
    pub pages_scanned: usize,
    /// Image XObjects found across all pages.
    pub images_seen: usize,
    /// JPEG files written.
    pub images_exported: usize,
    /// Flate images recognised but not written.
    pub skipped_flate: usize,
    /// Images skipped for any other filter.
    pub skipped_other: usize,
}

/// An image XObject referenced from a page's resources.
#[derive(Debug, Clone, Copy)]
pub struct PageImage<'a> {
    /// Resource name, e.g. `Im0`.
    pub name: &'a [u8],
    /// Object the resource entry points at.
    pub id: ObjectId,
    /// The image stream.
    pub stream: &'a Stream,
}

/// Width, height and bit depth of a Flate-compressed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngMetadata {
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
    /// Bits per colour component.
    pub bits_per_component: i64,
}

/// Writes the JPEG images embedded in a PDF to a directory.
#[derive(Debug, Clone)]
pub struct ImageExtractor {
    output_dir: PathBuf,
}

impl ImageExtractor {
    /// Create an extractor writing into `output_dir`.
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Extract every exportable image of the PDF at `input`.
    ///
    /// Files are named `Image0.jpeg`, `Image1.jpeg`, ... in page order. An
    /// image referenced from several pages is written once per reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created, the PDF
    /// cannot be loaded, or an image file cannot be written.
    pub fn extract(&self, input: &Path, formatter: &OutputFormatter) -> Result<ExtractStatistics> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| {
            PdfImgError::FailedToCreateDirectory {
                path: self.output_dir.clone(),
                source,
            }
        })?;

        let loaded = PdfReader::read(input)?;
        formatter.info("Scanning PDF for extractable images...");
        debug!(pages = loaded.page_count, "scanning pages");

        let stats = self.extract_from_document(&loaded.document, formatter)?;

        info!(
            input = %input.display(),
            pages = stats.pages_scanned,
            exported = stats.images_exported,
            "extraction complete"
        );

        Ok(stats)
    }

    /// Extract from an already loaded document.
    pub fn extract_from_document(
        &self,
        doc: &Document,
        formatter: &OutputFormatter,
    ) -> Result<ExtractStatistics> {
        let mut stats = ExtractStatistics::default();

        for (page_number, page_id) in doc.get_pages() {
            stats.pages_scanned += 1;

            for image in page_images(doc, page_id) {
                stats.images_seen += 1;

                let filter = ImageFilter::from_dict(doc, &image.stream.dict);
                match filter.export_kind() {
                    ImageExport::Jpeg => {
                        let path = self.export_jpeg(image.stream, stats.images_exported)?;
                        formatter.debug(&format!("Page {page_number}: wrote {}", path.display()));
                        stats.images_exported += 1;
                    }
                    ImageExport::Png => {
                        let metadata = export_png(image.stream);
                        formatter.debug(&format!(
                            "Page {page_number}: skipped {} ({}x{}, {} bpc, Flate images are not decoded)",
                            String::from_utf8_lossy(image.name),
                            metadata.width,
                            metadata.height,
                            metadata.bits_per_component
                        ));
                        stats.skipped_flate += 1;
                    }
                    ImageExport::Skip(reason) => {
                        self.report_skip(formatter, page_number, &image, &reason);
                        stats.skipped_other += 1;
                    }
                }
            }
        }

        Ok(stats)
    }

    /// Write the raw stream bytes as `Image<index>.jpeg`.
    fn export_jpeg(&self, stream: &Stream, index: usize) -> Result<PathBuf> {
        let path = self.output_dir.join(format!("Image{index}.jpeg"));
        std::fs::write(&path, &stream.content).map_err(|source| PdfImgError::FailedToWrite {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), bytes = stream.content.len(), "exported JPEG");
        Ok(path)
    }

    fn report_skip(
        &self,
        formatter: &OutputFormatter,
        page_number: u32,
        image: &PageImage<'_>,
        reason: &SkipReason,
    ) {
        debug!(page = page_number, object = ?image.id, %reason, "skipping image");
        formatter.debug(&format!(
            "Page {page_number}: skipped {} ({reason})",
            String::from_utf8_lossy(image.name)
        ));
    }
}

/// Read the metadata of a Flate-compressed image.
///
/// Converting the samples into a PNG is not implemented; nothing is written.
pub fn export_png(stream: &Stream) -> PngMetadata {
    let int = |key: &[u8]| {
        stream
            .dict
            .get(key)
            .and_then(Object::as_i64)
            .unwrap_or(0)
    };

    let metadata = PngMetadata {
        width: int(b"Width"),
        height: int(b"Height"),
        bits_per_component: int(b"BitsPerComponent"),
    };
    debug!(?metadata, "Flate image found, PNG export not implemented");
    metadata
}

/// Image XObjects reachable from the resources of `page_id`.
///
/// Only entries that are indirect references to streams with
/// `/Subtype /Image` are returned; forms and inline values are ignored.
pub fn page_images(doc: &Document, page_id: ObjectId) -> Vec<PageImage<'_>> {
    let Some(xobjects) = page_resources(doc, page_id)
        .and_then(|resources| resources.get(b"XObject").ok())
        .and_then(|xobjects| resolve_dict(doc, xobjects))
    else {
        return Vec::new();
    };

    xobjects
        .iter()
        .filter_map(|(name, value)| {
            let Object::Reference(id) = value else {
                return None;
            };
            let Ok(Object::Stream(stream)) = doc.get_object(*id) else {
                return None;
            };
            is_image(&stream.dict).then_some(PageImage {
                name: name.as_slice(),
                id: *id,
                stream,
            })
        })
        .collect()
}

/// The resource dictionary of a page, inherited from an ancestor if the page
/// has none of its own.
fn page_resources(doc: &Document, page_id: ObjectId) -> Option<&Dictionary> {
    let mut node = doc.get_dictionary(page_id).ok()?;

    for _ in 0..MAX_TREE_DEPTH {
        if let Ok(resources) = node.get(b"Resources") {
            return resolve_dict(doc, resources);
        }

        let parent = node.get(b"Parent").and_then(Object::as_reference).ok()?;
        node = doc.get_dictionary(parent).ok()?;
    }

    None
}

fn resolve_dict<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Dictionary> {
    match object {
        Object::Dictionary(dict) => Some(dict),
        Object::Reference(id) => doc.get_object(*id).and_then(Object::as_dict).ok(),
        _ => None,
    }
}

fn is_image(dict: &Dictionary) -> bool {
    matches!(dict.get(b"Subtype"), Ok(Object::Name(name)) if name == b"Image")
}
