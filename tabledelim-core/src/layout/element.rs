use serde::Serialize;

use crate::analysis::{bbox::Bbox, kind::ElementKind};

use super::{HasBbox, TextElement};

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Layout {
    pub bbox: Bbox,
    pub kind: ElementKind,
    pub page_no: usize,
    pub bbox_id: usize,
    pub text: Option<String>,
}

impl Layout {
    pub fn new(bbox: Bbox, kind: ElementKind, text: Option<String>) -> Self {
        Self {
            bbox,
            kind,
            page_no: 0,
            bbox_id: 0,
            text,
        }
    }

    pub fn new_text(bbox: Bbox, text: impl Into<String>) -> Self {
        Self::new(bbox, ElementKind::Text, Some(text.into()))
    }

    pub fn new_char(bbox: Bbox, ch: char) -> Self {
        Self::new(bbox, ElementKind::Char, Some(ch.to_string()))
    }

    pub fn new_line(bbox: Bbox) -> Self {
        Self::new(bbox, ElementKind::Line, None)
    }

    pub fn new_rect(bbox: Bbox) -> Self {
        Self::new(bbox, ElementKind::Rect, None)
    }
}

impl HasBbox for Layout {
    fn bbox(&self) -> Bbox {
        self.bbox
    }
}

impl TextElement for Layout {
    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn kind(&self) -> ElementKind {
        self.kind
    }
}
