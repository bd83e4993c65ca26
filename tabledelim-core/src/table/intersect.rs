use crate::{
    analysis::bbox::Bbox,
    layout::{DocumentPage, HasBbox},
};

/// Creates the region shared by all `regions`.
///
/// The new box is `(max(lefts), max(tops), min(rights), min(bottoms))` and is
/// not checked: regions that do not overlap yield an inverted region, whose
/// text extraction comes back empty. `None` when `regions` is empty.
pub fn intersection<'p, P, R>(page: &'p P, regions: &[R]) -> Option<P::Region<'p>>
where
    P: DocumentPage,
    R: HasBbox,
{
    Bbox::intersect_all(regions.iter().map(HasBbox::bbox)).map(|bbox| page.create_region(bbox))
}
