//! Stream filters of image XObjects and what the extractor does with each.

use lopdf::{Dictionary, Document, Object};
use std::fmt;
use tracing::warn;

/// JPEG-compressed data.
pub const DCT_DECODE: &str = "DCTDecode";
/// zlib/deflate-compressed data.
pub const FLATE_DECODE: &str = "FlateDecode";

/// The `/Filter` entry of an image stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageFilter {
    /// A single filter name.
    Single(String),
    /// Filters applied in order, first to last.
    Chain(Vec<String>),
    /// No filter; the stream holds raw samples.
    Absent,
}

/// What to do with an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageExport {
    /// Write the stream bytes out as a `.jpeg` file.
    Jpeg,
    /// Flate-compressed samples. Read metadata only.
    Png,
    /// Not exported.
    Skip(SkipReason),
}

/// Why an image is not exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The stream has no filter.
    NoFilter,
    /// A single filter other than DCT or Flate, e.g. `CCITTFaxDecode`.
    UnsupportedFilter(String),
    /// A filter chain that does not start with `DCTDecode`.
    UnsupportedChain(Vec<String>),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFilter => write!(f, "no filter"),
            Self::UnsupportedFilter(name) => write!(f, "unsupported filter /{name}"),
            Self::UnsupportedChain(names) => {
                write!(f, "unsupported filter chain [/{}]", names.join(" /"))
            }
        }
    }
}

impl ImageFilter {
    /// Read the `/Filter` entry of an image dictionary.
    ///
    /// An indirect filter value is resolved through `doc`. An array is
    /// classified by its first entry: later entries that are not names are
    /// dropped. An array whose first entry is not a name, or a value that is
    /// neither a name nor an array, is treated as absent.
    pub fn from_dict(doc: &Document, dict: &Dictionary) -> Self {
        let Ok(value) = dict.get(b"Filter") else {
            return Self::Absent;
        };

        let value = match value {
            Object::Reference(id) => match doc.get_object(*id) {
                Ok(resolved) => resolved,
                Err(_) => return Self::Absent,
            },
            other => other,
        };

        match value {
            Object::Name(name) => Self::Single(name_to_string(name)),
            Object::Array(items) => {
                if let Some(first) = items.first().filter(|item| item.as_name().is_err()) {
                    warn!(?first, "filter array does not start with a name");
                    return Self::Absent;
                }

                let names: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.as_name().ok().map(name_to_string))
                    .collect();
                if names.len() != items.len() {
                    warn!(?items, "ignoring non-name entries in filter array");
                }

                Self::Chain(names)
            }
            other => {
                warn!(?other, "unexpected /Filter value");
                Self::Absent
            }
        }
    }

    /// Decide how an image with this filter is exported.
    ///
    /// Only the first entry of a chain is inspected: a chain starting with
    /// `DCTDecode` is exported as JPEG and every other chain is skipped.
    pub fn export_kind(&self) -> ImageExport {
        match self {
            Self::Single(name) => match name.as_str() {
                DCT_DECODE => ImageExport::Jpeg,
                FLATE_DECODE => ImageExport::Png,
                _ => ImageExport::Skip(SkipReason::UnsupportedFilter(name.clone())),
            },
            Self::Chain(names) => match names.first().map(String::as_str) {
                Some(DCT_DECODE) => ImageExport::Jpeg,
                _ => ImageExport::Skip(SkipReason::UnsupportedChain(names.clone())),
            },
            Self::Absent => ImageExport::Skip(SkipReason::NoFilter),
        }
    }
}

impl fmt::Display for ImageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(name) => write!(f, "/{name}"),
            Self::Chain(names) => write!(f, "[/{}]", names.join(" /")),
            Self::Absent => write!(f, "none"),
        }
    }
}

fn name_to_string(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}
