use serde::Serialize;

/// The class of a page element as seen by selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A single glyph.
    Char,
    /// A run of text (word or segment).
    Text,
    /// A thin path object, typically a ruling line.
    Line,
    /// Any other path object.
    Rect,
}

impl ElementKind {
    pub const fn name(&self) -> &str {
        match self {
            ElementKind::Char => "char",
            ElementKind::Text => "text",
            ElementKind::Line => "line",
            ElementKind::Rect => "rect",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "char" => Some(ElementKind::Char),
            "text" => Some(ElementKind::Text),
            "line" => Some(ElementKind::Line),
            "rect" => Some(ElementKind::Rect),
            _ => None,
        }
    }
}
