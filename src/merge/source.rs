//! JPEG input files.

use image::{DynamicImage, ExtendedColorType, ImageDecoder, ImageFormat, ImageReader};
use lopdf::{Object, Stream, dictionary};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::{PdfImgError, Result};

/// PDF colour space of an embedded JPEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// One component.
    DeviceGray,
    /// Three components.
    DeviceRgb,
    /// Four components.
    DeviceCmyk,
}

impl ColorSpace {
    /// PDF name of the colour space.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::DeviceGray => "DeviceGray",
            Self::DeviceRgb => "DeviceRGB",
            Self::DeviceCmyk => "DeviceCMYK",
        }
    }

    fn from_color_type(color: ExtendedColorType) -> Self {
        match color {
            ExtendedColorType::L8
            | ExtendedColorType::L16
            | ExtendedColorType::La8
            | ExtendedColorType::La16 => Self::DeviceGray,
            ExtendedColorType::Cmyk8 => Self::DeviceCmyk,
            _ => Self::DeviceRgb,
        }
    }
}

/// A JPEG file read from disk and validated by a full decode.
#[derive(Debug, Clone)]
pub struct ImageSource {
    /// Where the image was read from.
    pub path: PathBuf,
    /// The encoded JPEG bytes, embedded unchanged.
    pub bytes: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Colour space of the encoded data.
    pub color_space: ColorSpace,
}

impl ImageSource {
    /// Read and validate a JPEG file.
    ///
    /// # Errors
    ///
    /// Returns [`PdfImgError::InvalidImage`] if the file cannot be read, is
    /// not JPEG data, or fails to decode.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|err| {
            PdfImgError::invalid_image(path.to_path_buf(), format!("Failed to read file: {err}"))
        })?;

        Self::from_bytes(path, bytes)
    }

    /// Validate JPEG bytes that were read from `path`.
    pub fn from_bytes<P: AsRef<Path>>(path: P, bytes: Vec<u8>) -> Result<Self> {
        let path = path.as_ref();
        let invalid = |reason: String| PdfImgError::invalid_image(path.to_path_buf(), reason);

        let reader = ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .map_err(|err| invalid(err.to_string()))?;

        if reader.format() != Some(ImageFormat::Jpeg) {
            return Err(invalid("Not a JPEG file".to_string()));
        }

        let decoder = reader.into_decoder().map_err(|err| invalid(err.to_string()))?;
        let (width, height) = decoder.dimensions();
        let color_space = ColorSpace::from_color_type(decoder.original_color_type());

        if width == 0 || height == 0 {
            return Err(invalid(format!("Invalid image dimensions {width}x{height}")));
        }

        // Decode the pixels once so truncated or corrupt data is rejected here.
        DynamicImage::from_decoder(decoder).map_err(|err| invalid(err.to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
            bytes,
            width,
            height,
            color_space,
        })
    }

    /// Build the `DCTDecode` image XObject carrying the original JPEG bytes.
    pub fn to_xobject(&self) -> Stream {
        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => Object::Integer(i64::from(self.width)),
            "Height" => Object::Integer(i64::from(self.height)),
            "ColorSpace" => self.color_space.pdf_name(),
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        };

        Stream::new(dict, self.bytes.clone()).with_compression(false)
    }
}

/// Last path component, or the whole path if there is none.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
