//! The document engine seen through the few operations table extraction needs.
//!
//! The table pipeline only talks to these traits, so any page model that can
//! answer geometry and text queries can be plugged in. [`page::Page`] is the
//! in-memory implementation shipped with the crate.

use crate::{
    analysis::{bbox::Bbox, kind::ElementKind},
    error::TabledelimError,
};

pub mod element;
pub mod page;
pub mod selector;

pub trait HasBbox {
    fn bbox(&self) -> Bbox;
}

impl HasBbox for Bbox {
    fn bbox(&self) -> Bbox {
        *self
    }
}

/// An element of a page: a glyph, a text run or a vector shape.
pub trait TextElement: HasBbox + Clone {
    /// Text payload, `None` for shapes.
    fn text(&self) -> Option<&str>;

    fn kind(&self) -> ElementKind;
}

/// A rectangular area of a page created by [`DocumentPage::create_region`].
pub trait TextRegion: HasBbox {
    type Element: TextElement;

    /// Text inside the region, `None` when the region holds no text.
    fn extract_text(&self) -> Result<Option<String>, TabledelimError>;

    /// Elements inside the region matching `selector`.
    fn find_all(&self, selector: &str) -> Result<Vec<Self::Element>, TabledelimError>;
}

pub trait DocumentPage {
    type Element: TextElement;
    type Region<'a>: TextRegion<Element = Self::Element>
    where
        Self: 'a;

    fn width(&self) -> f32;

    fn height(&self) -> f32;

    /// First element matching `selector`.
    fn find(&self, selector: &str) -> Result<Option<Self::Element>, TabledelimError>;

    fn find_all(&self, selector: &str) -> Result<Vec<Self::Element>, TabledelimError>;

    /// Builds a region over `bbox`. The geometry is taken as is, inverted
    /// boxes included.
    fn create_region(&self, bbox: Bbox) -> Self::Region<'_>;
}
