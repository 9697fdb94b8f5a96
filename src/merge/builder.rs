//! Assembles a new PDF with one image per page.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use tracing::debug;

use super::layout::{PageSize, Placement};
use super::source::ImageSource;
use crate::error::{PdfImgError, Result};

/// Resource name of the image on each page.
const IMAGE_RESOURCE: &str = "Im0";

/// Incrementally builds an image-per-page document.
///
/// The page tree node is allocated up front so pages can point at their
/// parent; the node itself and the catalog are written by [`finish`].
///
/// [`finish`]: ImagePdfBuilder::finish
pub struct ImagePdfBuilder {
    doc: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    page_size: PageSize,
}

impl ImagePdfBuilder {
    /// Start an empty document whose pages have `page_size`.
    pub fn new(page_size: PageSize) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        Self {
            doc,
            pages_id,
            page_ids: Vec::new(),
            page_size,
        }
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Append a page showing `image` scaled to fit and centered.
    ///
    /// # Errors
    ///
    /// Returns an error if the page content stream cannot be encoded.
    pub fn add_image_page(&mut self, image: &ImageSource) -> Result<Placement> {
        let placement = Placement::fit(self.page_size, image.width, image.height);

        let image_id = self.doc.add_object(image.to_xobject());

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new("cm", placement.transform()),
                Operation::new("Do", vec![Object::Name(IMAGE_RESOURCE.as_bytes().to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let encoded = content
            .encode()
            .map_err(|err| PdfImgError::failed_to_build_pdf(err.to_string()))?;
        let content_id = self.doc.add_object(Stream::new(dictionary! {}, encoded));

        let mut xobjects = Dictionary::new();
        xobjects.set(IMAGE_RESOURCE, image_id);

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => self.page_size.media_box(),
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => xobjects,
            },
        });
        self.page_ids.push(page_id);

        debug!(
            image = %image.path.display(),
            page = self.page_ids.len(),
            ?placement,
            "added image page"
        );

        Ok(placement)
    }

    /// Write the page tree and catalog and return the finished document.
    pub fn finish(mut self) -> Document {
        let kids: Vec<Object> = self
            .page_ids
            .iter()
            .map(|id| Object::Reference(*id))
            .collect();
        let count = kids.len() as i64;

        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => Object::Integer(count),
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        let info_id = self.doc.add_object(dictionary! {
            "Producer" => Object::string_literal(concat!("pdfimg ", env!("CARGO_PKG_VERSION"))),
        });

        self.doc.trailer.set("Root", catalog_id);
        self.doc.trailer.set("Info", info_id);

        self.doc
    }
}
