use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    analysis::bbox::Bbox,
    consts::BAND_INSET,
    error::{InvalidDirectionSnafu, TabledelimError},
    layout::{DocumentPage, HasBbox},
};

/// Axis along which a page is cut into bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Horizontal bands stacked top to bottom.
    Row,
    /// Vertical bands laid out left to right.
    Col,
}

impl Direction {
    pub const fn name(&self) -> &str {
        match self {
            Direction::Row => "row",
            Direction::Col => "col",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = TabledelimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Direction::Row),
            "col" => Ok(Direction::Col),
            other => InvalidDirectionSnafu { direction: other }.fail(),
        }
    }
}

/// Cuts `outer` into one band per delimiter.
///
/// `delimiters` must already be sorted along `direction`. Band `i` starts at
/// delimiter `i` and stops [`BAND_INSET`] before delimiter `i + 1`; the last
/// band ends at the far edge of its own delimiter, not at the edge of `outer`.
/// On the cross axis every band spans `outer`. Nothing is validated, so out of
/// order delimiters give inverted bands.
pub fn band_boxes(outer: &Bbox, delimiters: &[Bbox], direction: Direction) -> Vec<Bbox> {
    delimiters
        .iter()
        .enumerate()
        .map(|(idx, delim)| {
            let next = delimiters.get(idx + 1);
            match direction {
                Direction::Row => Bbox::from_ltrb(
                    outer.left(),
                    delim.top(),
                    outer.right(),
                    next.map_or(delim.bottom(), |next| next.top() - BAND_INSET),
                ),
                Direction::Col => Bbox::from_ltrb(
                    delim.left(),
                    outer.top(),
                    next.map_or(delim.right(), |next| next.left() - BAND_INSET),
                    outer.bottom(),
                ),
            }
        })
        .collect()
}

/// Builds the row or column regions of a table from its sorted delimiters.
pub fn delineate_regions<'p, P, E>(
    page: &'p P,
    bbox: &Bbox,
    delimiters: &[E],
    direction: Direction,
) -> Vec<P::Region<'p>>
where
    P: DocumentPage,
    E: HasBbox,
{
    let delimiters = delimiters.iter().map(HasBbox::bbox).collect::<Vec<_>>();

    band_boxes(bbox, &delimiters, direction)
        .into_iter()
        .map(|band| page.create_region(band))
        .collect()
}
