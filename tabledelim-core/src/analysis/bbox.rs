use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::{InvalidEdgeSnafu, TabledelimError};

/// A 2D axis-aligned bounding box represented by minimum and maximum points.
///
/// Coordinates follow the page convention used everywhere in this crate:
/// origin at the top-left corner, x growing to the right and y growing
/// downward. `min` therefore holds `(left, top)` and `max` holds
/// `(right, bottom)`.
///
/// A bbox is never validated. An inverted box (`left > right` or
/// `top > bottom`) is a legal value and simply contains nothing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bbox {
    /// The minimum point of the bounding box (top-left corner).
    pub min: glam::Vec2,
    /// The maximum point of the bounding box (bottom-right corner).
    pub max: glam::Vec2,
}

impl Bbox {
    /// Creates a new bounding box from minimum and maximum points.
    ///
    /// # Example
    /// ```
    /// use glam::Vec2;
    /// use tabledelim_core::analysis::bbox::Bbox;
    /// let bbox = Bbox::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0));
    /// assert_eq!(bbox.right(), 10.0);
    /// ```
    pub fn new(min: glam::Vec2, max: glam::Vec2) -> Self {
        Self { min, max }
    }

    /// Creates a new bounding box from its four edges.
    ///
    /// # Example
    /// ```
    /// use tabledelim_core::analysis::bbox::Bbox;
    /// let bbox = Bbox::from_ltrb(10.0, 20.0, 110.0, 40.0);
    /// assert_eq!(bbox.width(), 100.0);
    /// assert_eq!(bbox.height(), 20.0);
    /// ```
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            min: glam::Vec2::new(left, top),
            max: glam::Vec2::new(right, bottom),
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Returns the coordinate of the requested edge.
    ///
    /// # Example
    /// ```
    /// use tabledelim_core::analysis::bbox::{Bbox, Edge};
    /// let bbox = Bbox::from_ltrb(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(bbox.edge(Edge::Top), 2.0);
    /// assert_eq!(bbox.edge(Edge::Right), 3.0);
    /// ```
    pub fn edge(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Left => self.min.x,
            Edge::Top => self.min.y,
            Edge::Right => self.max.x,
            Edge::Bottom => self.max.y,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Calculates the center point of the bounding box.
    ///
    /// # Example
    /// ```
    /// use glam::Vec2;
    /// use tabledelim_core::analysis::bbox::Bbox;
    /// let bbox = Bbox::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 2.0));
    /// assert_eq!(bbox.center(), Vec2::new(2.0, 1.0));
    /// ```
    pub fn center(&self) -> glam::Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Returns `true` when the box is inverted on at least one axis.
    ///
    /// Zero-width or zero-height boxes are not degenerate, they still contain
    /// the points on their edges.
    pub fn is_degenerate(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Computes the box shared by this bounding box and another.
    ///
    /// The result is `(max(lefts), max(tops), min(rights), min(bottoms))`. It is
    /// never clamped: boxes that do not overlap produce an inverted box, which
    /// callers can detect with [`Bbox::is_degenerate`].
    ///
    /// # Example
    /// ```
    /// use tabledelim_core::analysis::bbox::Bbox;
    /// let row = Bbox::from_ltrb(0.0, 100.0, 600.0, 299.0);
    /// let col = Bbox::from_ltrb(50.0, 0.0, 200.0, 800.0);
    /// assert_eq!(row.intersect(&col), Bbox::from_ltrb(50.0, 100.0, 200.0, 299.0));
    ///
    /// let apart = Bbox::from_ltrb(0.0, 0.0, 1.0, 1.0).intersect(&Bbox::from_ltrb(5.0, 5.0, 6.0, 6.0));
    /// assert!(apart.is_degenerate());
    /// ```
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }

    /// Folds [`Bbox::intersect`] over any number of boxes.
    ///
    /// Returns `None` for an empty input. The result only depends on the set of
    /// boxes, not on their order.
    pub fn intersect_all<I>(boxes: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        boxes.into_iter().reduce(|acc, bbox| acc.intersect(&bbox))
    }

    /// Checks whether a point lies inside the box, edges included.
    ///
    /// A degenerate box contains no point.
    pub fn contains_point(&self, point: glam::Vec2) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    /// Converts a box given in PDF user space (origin bottom-left, y up) into
    /// page coordinates (origin top-left, y down).
    ///
    /// # Example
    /// ```
    /// use tabledelim_core::analysis::bbox::Bbox;
    /// // PDF rect spanning y = 700..780 on an 800 pt high page
    /// let bbox = Bbox::from_pdf_edges(10.0, 700.0, 50.0, 780.0, 800.0);
    /// assert_eq!(bbox, Bbox::from_ltrb(10.0, 20.0, 50.0, 100.0));
    /// ```
    pub fn from_pdf_edges(left: f32, bottom: f32, right: f32, top: f32, page_height: f32) -> Self {
        Self::from_ltrb(left, page_height - top, right, page_height - bottom)
    }
}

impl fmt::Display for Bbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}, {:.2})",
            self.left(),
            self.top(),
            self.right(),
            self.bottom()
        )
    }
}

/// One of the four edges of a [`Bbox`], used to pick the sort axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    pub const fn name(&self) -> &str {
        match self {
            Edge::Left => "left",
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
        }
    }
}

impl FromStr for Edge {
    type Err = TabledelimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Edge::Left),
            "top" => Ok(Edge::Top),
            "right" => Ok(Edge::Right),
            "bottom" => Ok(Edge::Bottom),
            other => InvalidEdgeSnafu { edge: other }.fail(),
        }
    }
}
