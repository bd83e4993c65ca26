use std::fmt;

use serde::Serialize;
use snafu::ResultExt;
use tracing::*;

use crate::{
    error::{JsonSnafu, TabledelimError},
    layout::{DocumentPage, HasBbox, TextRegion},
};

use super::intersect::intersection;

/// Text of every cell of an extracted table, row major.
///
/// A cell is `None` when its region holds no text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    rows: Vec<Vec<Option<String>>>,
    n_cols: usize,
}

impl Table {
    pub fn new(rows: Vec<Vec<Option<String>>>, n_cols: usize) -> Self {
        Self { rows, n_cols }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.n_cols == 0
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Option<String>>> {
        self.rows
    }

    pub fn to_json(&self) -> Result<String, TabledelimError> {
        serde_json::to_string(&self.rows).context(JsonSnafu)
    }
}

/// Pipe separated grid, one table row per line. Line breaks inside a cell are
/// flattened to spaces.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let cells = row
                .iter()
                .map(|cell| cell.as_deref().unwrap_or("").replace('\n', " "))
                .collect::<Vec<_>>();
            write!(f, "| {} |", cells.join(" | "))?;
        }
        Ok(())
    }
}

/// Reads the text of every row/column crossing.
///
/// Cell `(r, c)` is the text of the intersection of `rows[r]` and `cols[c]`.
/// Crossings that do not overlap are still extracted, they just come back
/// empty.
pub fn assemble<P, R>(page: &P, rows: &[R], cols: &[R]) -> Result<Table, TabledelimError>
where
    P: DocumentPage,
    R: HasBbox,
{
    let mut table = Vec::with_capacity(rows.len());

    for (r, row) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(cols.len());
        for (c, col) in cols.iter().enumerate() {
            let cell = [row.bbox(), col.bbox()];
            let Some(region) = intersection(page, &cell) else {
                continue;
            };

            let bbox = region.bbox();
            if bbox.is_degenerate() {
                debug!("cell ({}, {}) has degenerate bbox {}", r, c, bbox);
            }

            cells.push(region.extract_text()?);
        }
        table.push(cells);
    }

    Ok(Table::new(table, cols.len()))
}
