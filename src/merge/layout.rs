//! Page geometry for placing an image on a page.

use lopdf::Object;

/// Page dimensions in PDF points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    /// Page width in points.
    pub width: f32,
    /// Page height in points.
    pub height: f32,
}

impl PageSize {
    /// ISO A4 portrait.
    pub const A4: Self = Self {
        width: 595.0,
        height: 842.0,
    };

    /// The `/MediaBox` array for a page of this size.
    pub fn media_box(&self) -> Vec<Object> {
        vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(self.width),
            Object::Real(self.height),
        ]
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

/// Where an image is drawn on a page, in points from the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Left edge.
    pub x: f32,
    /// Bottom edge.
    pub y: f32,
    /// Drawn width.
    pub width: f32,
    /// Drawn height.
    pub height: f32,
}

impl Placement {
    /// Scale an image of `image_width` x `image_height` pixels to fit the
    /// page while keeping its aspect ratio, then center it.
    ///
    /// The binding axis is filled exactly: if the width limits the scale the
    /// drawn width equals the page width, otherwise the drawn height equals
    /// the page height. Small images are scaled up.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfimg::merge::layout::{PageSize, Placement};
    ///
    /// let page = PageSize { width: 600.0, height: 800.0 };
    /// let placement = Placement::fit(page, 1200, 600);
    /// assert_eq!(placement.width, 600.0);
    /// assert_eq!(placement.height, 300.0);
    /// assert_eq!(placement.y, 250.0);
    /// ```
    pub fn fit(page: PageSize, image_width: u32, image_height: u32) -> Self {
        let image_width = image_width.max(1) as f32;
        let image_height = image_height.max(1) as f32;

        let scale_x = page.width / image_width;
        let scale_y = page.height / image_height;

        let (width, height) = if scale_x <= scale_y {
            (page.width, image_height * scale_x)
        } else {
            (image_width * scale_y, page.height)
        };

        Self {
            x: (page.width - width) / 2.0,
            y: (page.height - height) / 2.0,
            width,
            height,
        }
    }

    /// Operands for the `cm` operator that maps the unit square onto this rectangle.
    pub fn transform(&self) -> Vec<Object> {
        vec![
            Object::Real(self.width),
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(self.height),
            Object::Real(self.x),
            Object::Real(self.y),
        ]
    }
}
