//! Delimiter driven table extraction.
//!
//! Row delimiters (sorted by `top`) and column delimiters (sorted by `left`)
//! cut the area of interest into bands; every row band crossed with every
//! column band is a cell whose text ends up in the [`Table`].

use derive_builder::Builder;
use tracing::*;

use crate::{
    analysis::bbox::{Bbox, Edge},
    error::TabledelimError,
    layout::DocumentPage,
};

pub mod assemble;
pub mod boundary;
pub mod delineate;
pub mod intersect;
pub mod search;
pub mod slice;
pub mod sort;

pub use assemble::{Table, assemble};
pub use boundary::{Boundaries, Target};
pub use delineate::{Direction, delineate_regions};
pub use intersect::intersection;
pub use search::find_by_regex;
pub use slice::slice_fitting_element;
pub use sort::sort_by_edge;

/// Area of the page a table is looked for in.
///
/// Every edge left unset falls back to the page's own extent, edge by edge.
///
/// ```
/// use tabledelim_core::table::TableBboxBuilder;
///
/// let bbox = TableBboxBuilder::default().top(120.0).build().unwrap();
/// let resolved = bbox.resolve(600.0, 800.0);
/// assert_eq!(resolved.top(), 120.0);
/// assert_eq!(resolved.right(), 600.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Builder)]
#[builder(default, setter(strip_option))]
pub struct TableBbox {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
}

impl TableBbox {
    pub fn resolve(&self, width: f32, height: f32) -> Bbox {
        Bbox::from_ltrb(
            self.left.unwrap_or(0.0),
            self.top.unwrap_or(0.0),
            self.right.unwrap_or(width),
            self.bottom.unwrap_or(height),
        )
    }
}

/// Extracts the table delimited by `rows` and `cols` from `page`.
///
/// The result has one row per row delimiter and one column per column
/// delimiter. No delimiters on either axis is not an error, the table is then
/// empty along that axis.
#[instrument(skip_all)]
pub fn table_delim<P>(
    page: &P,
    rows: impl Into<Boundaries<P::Element>>,
    cols: impl Into<Boundaries<P::Element>>,
    bbox: &TableBbox,
) -> Result<Table, TabledelimError>
where
    P: DocumentPage,
{
    let outer = bbox.resolve(page.width(), page.height());

    let rows: Boundaries<P::Element> = rows.into();
    let cols: Boundaries<P::Element> = cols.into();

    let rows = sort_by_edge(&rows.resolve(page)?, Edge::Top);
    let cols = sort_by_edge(&cols.resolve(page)?, Edge::Left);
    debug!(
        "table in {} with {} row and {} column delimiters",
        outer,
        rows.len(),
        cols.len()
    );

    let rows = delineate_regions(page, &outer, &rows, Direction::Row);
    let cols = delineate_regions(page, &outer, &cols, Direction::Col);

    let table = assemble(page, &rows, &cols)?;
    info!("extracted {}x{} table", table.n_rows(), table.n_cols());

    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        analysis::kind::ElementKind,
        layout::{HasBbox, TextElement, TextRegion, element::Layout, page::Page},
    };

    #[test]
    fn test_table_bbox_resolve() {
        assert_eq!(
            TableBbox::default().resolve(600.0, 800.0),
            Bbox::from_ltrb(0.0, 0.0, 600.0, 800.0)
        );

        let partial = TableBboxBuilder::default()
            .left(50.0)
            .bottom(400.0)
            .build()
            .unwrap();
        assert_eq!(
            partial.resolve(600.0, 800.0),
            Bbox::from_ltrb(50.0, 0.0, 600.0, 400.0)
        );
    }

    // Two row delimiters at top=100 and top=300, one full width column.
    fn scenario_page() -> Page {
        Page::with_blocks(
            600.0,
            800.0,
            0,
            vec![
                Layout::new_rect(Bbox::from_ltrb(0.0, 300.0, 600.0, 320.0)),
                Layout::new_rect(Bbox::from_ltrb(0.0, 100.0, 600.0, 120.0)),
                Layout::new_line(Bbox::from_ltrb(0.0, 0.0, 600.0, 800.0)),
                Layout::new_text(Bbox::from_ltrb(10.0, 104.0, 90.0, 114.0), "first"),
                Layout::new_text(Bbox::from_ltrb(10.0, 250.0, 90.0, 260.0), "row"),
                Layout::new_text(Bbox::from_ltrb(10.0, 305.0, 90.0, 315.0), "second"),
                Layout::new_text(Bbox::from_ltrb(10.0, 600.0, 90.0, 610.0), "outside"),
            ],
        )
    }

    #[test]
    fn test_two_rows_one_column() {
        let page = scenario_page();
        let table = table_delim(&page, "rect", "line", &TableBbox::default()).unwrap();

        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 1);
        // row 0 spans 100..299, row 1 ends at its own delimiter (320)
        assert_eq!(table.cell(0, 0), Some("first\nrow"));
        assert_eq!(table.cell(1, 0), Some("second"));
    }

    #[test]
    fn test_elements_instead_of_selectors() {
        let page = scenario_page();
        let rows = page.find_all("rect").unwrap();
        let cols = vec![Layout::new_line(Bbox::from_ltrb(0.0, 0.0, 600.0, 800.0))];
        let table = table_delim(&page, rows, cols, &TableBbox::default()).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.cell(0, 0), Some("first\nrow"));
    }

    #[test]
    fn test_empty_rows() {
        let page = scenario_page();
        let table = table_delim(&page, Vec::<Layout>::new(), "line", &TableBbox::default()).unwrap();
        assert_eq!(table.n_rows(), 0);
        assert!(table.is_empty());

        let table = table_delim(&page, "text:contains('missing')", "line", &TableBbox::default())
            .unwrap();
        assert_eq!(table.n_rows(), 0);
    }

    #[test]
    fn test_bbox_override_limits_columns() {
        let page = scenario_page();
        let bbox = TableBboxBuilder::default().right(50.0).build().unwrap();
        let table = table_delim(&page, "rect", "line", &bbox).unwrap();
        // row bands stop at x=50, text centers sit at x=50 and are kept
        assert_eq!(table.cell(1, 0), Some("second"));

        let bbox = TableBboxBuilder::default().right(40.0).build().unwrap();
        let table = table_delim(&page, "rect", "line", &bbox).unwrap();
        assert_eq!(table.cell(0, 0), None);
        assert_eq!(table.cell(1, 0), None);
    }

    #[test]
    fn test_multi_column_grid() {
        let mut page = Page::new(300.0, 300.0, 0);
        // column headers act as column delimiters, row labels as row delimiters
        for (left, header) in [(200.0, "C"), (0.0, "A"), (100.0, "B")] {
            page.push(Layout::new_text(
                Bbox::from_ltrb(left, 0.0, left + 90.0, 10.0),
                header,
            ));
        }
        for (top, label) in [(50.0, "r1"), (150.0, "r2")] {
            page.push(Layout::new_line(Bbox::from_ltrb(0.0, top, 300.0, top + 90.0)));
            page.push(Layout::new_text(
                Bbox::from_ltrb(105.0, top + 10.0, 130.0, top + 20.0),
                label,
            ));
        }

        let cols = page.find_all("text:regex('^[A-C]$')").unwrap();
        let table = table_delim(&page, "line", cols, &TableBbox::default()).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 3);
        assert_eq!(
            table.rows(),
            &[
                vec![None, Some("r1".to_string()), None],
                vec![None, Some("r2".to_string()), None],
            ]
        );
    }

    #[derive(Clone)]
    struct FakeElement(Bbox);

    impl HasBbox for FakeElement {
        fn bbox(&self) -> Bbox {
            self.0
        }
    }

    impl TextElement for FakeElement {
        fn text(&self) -> Option<&str> {
            None
        }

        fn kind(&self) -> ElementKind {
            ElementKind::Line
        }
    }

    // Engine double answering every query with fixed delimiters and reporting
    // each cell's bbox as its text.
    struct FakePage {
        rows: Vec<FakeElement>,
        cols: Vec<FakeElement>,
        regions: Cell<usize>,
    }

    struct FakeRegion(Bbox);

    impl HasBbox for FakeRegion {
        fn bbox(&self) -> Bbox {
            self.0
        }
    }

    impl TextRegion for FakeRegion {
        type Element = FakeElement;

        fn extract_text(&self) -> Result<Option<String>, TabledelimError> {
            Ok(Some(self.0.to_string()))
        }

        fn find_all(&self, _selector: &str) -> Result<Vec<FakeElement>, TabledelimError> {
            Ok(Vec::new())
        }
    }

    impl DocumentPage for FakePage {
        type Element = FakeElement;
        type Region<'a>
            = FakeRegion
        where
            Self: 'a;

        fn width(&self) -> f32 {
            600.0
        }

        fn height(&self) -> f32 {
            800.0
        }

        fn find(&self, selector: &str) -> Result<Option<FakeElement>, TabledelimError> {
            Ok(self.find_all(selector)?.into_iter().next())
        }

        fn find_all(&self, selector: &str) -> Result<Vec<FakeElement>, TabledelimError> {
            Ok(match selector {
                "rows" => self.rows.clone(),
                "cols" => self.cols.clone(),
                _ => Vec::new(),
            })
        }

        fn create_region(&self, bbox: Bbox) -> FakeRegion {
            self.regions.set(self.regions.get() + 1);
            FakeRegion(bbox)
        }
    }

    #[test]
    fn test_pipeline_on_fake_engine() {
        let page = FakePage {
            rows: vec![
                FakeElement(Bbox::from_ltrb(0.0, 300.0, 600.0, 320.0)),
                FakeElement(Bbox::from_ltrb(0.0, 100.0, 600.0, 120.0)),
            ],
            cols: vec![FakeElement(Bbox::from_ltrb(0.0, 0.0, 600.0, 800.0))],
            regions: Cell::new(0),
        };

        let table = table_delim(&page, "rows", "cols", &TableBbox::default()).unwrap();
        assert_eq!(
            table.rows(),
            &[
                vec![Some("(0.00, 100.00, 600.00, 299.00)".to_string())],
                vec![Some("(0.00, 300.00, 600.00, 320.00)".to_string())],
            ]
        );
        // 2 row bands + 1 column band + 2 cells
        assert_eq!(page.regions.get(), 5);
    }
}
