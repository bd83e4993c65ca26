use snafu::OptionExt;
use tracing::*;

use crate::{
    analysis::bbox::Bbox,
    error::{ElementNotFoundSnafu, TabledelimError},
    layout::{DocumentPage, HasBbox},
};

use super::{boundary::Target, delineate::Direction};

/// Cuts the page into the strip occupied by a single element.
///
/// A `Row` slice spans the full page width between the element's top and
/// bottom; a `Col` slice spans the full page height between its left and right.
/// A selector is resolved to its first match and fails with
/// [`TabledelimError::ElementNotFound`] when nothing matches.
pub fn slice_fitting_element<'p, P>(
    page: &'p P,
    target: &Target<P::Element>,
    direction: Direction,
) -> Result<P::Region<'p>, TabledelimError>
where
    P: DocumentPage,
{
    let element = match target {
        Target::Selector(selector) => page
            .find(selector)?
            .context(ElementNotFoundSnafu { selector })?
            .bbox(),
        Target::Element(element) => element.bbox(),
    };

    let slice = match direction {
        Direction::Row => Bbox::from_ltrb(0.0, element.top(), page.width(), element.bottom()),
        Direction::Col => Bbox::from_ltrb(element.left(), 0.0, element.right(), page.height()),
    };
    debug!("{} slice {} fitted to element {}", direction, slice, element);

    Ok(page.create_region(slice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{TextRegion, element::Layout, page::Page};

    fn page() -> Page {
        Page::with_blocks(
            600.0,
            800.0,
            0,
            vec![
                Layout::new_text(Bbox::from_ltrb(20.0, 100.0, 80.0, 112.0), "Total"),
                Layout::new_text(Bbox::from_ltrb(400.0, 102.0, 450.0, 110.0), "1,250"),
                Layout::new_text(Bbox::from_ltrb(30.0, 500.0, 70.0, 510.0), "Notes"),
            ],
        )
    }

    #[test]
    fn test_row_slice_by_selector() {
        let page = page();
        let target = Target::from("text:contains('Total')");
        let region = slice_fitting_element(&page, &target, Direction::Row).unwrap();
        assert_eq!(region.bbox(), Bbox::from_ltrb(0.0, 100.0, 600.0, 112.0));
        assert_eq!(region.extract_text().unwrap().as_deref(), Some("Total 1,250"));
    }

    #[test]
    fn test_col_slice_by_element() {
        let page = page();
        let notes = page.find("text:contains('Notes')").unwrap().unwrap();
        let region = slice_fitting_element(&page, &Target::Element(notes), Direction::Col).unwrap();
        assert_eq!(region.bbox(), Bbox::from_ltrb(30.0, 0.0, 70.0, 800.0));
        assert_eq!(region.extract_text().unwrap().as_deref(), Some("Total\nNotes"));
    }

    #[test]
    fn test_missing_element() {
        let page = page();
        let target = Target::from("text:contains('Absent')");
        let err = slice_fitting_element(&page, &target, Direction::Row).unwrap_err();
        assert!(matches!(err, TabledelimError::ElementNotFound { .. }));
    }
}
