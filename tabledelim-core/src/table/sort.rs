use crate::{analysis::bbox::Edge, layout::HasBbox};

/// Orders elements by one bbox coordinate, ascending.
///
/// The input is left untouched. Elements sharing the same coordinate come out
/// in reverse input order: repeatedly picking the minimum with a `<=`
/// comparison keeps the last of several equal candidates, and this is the
/// ordering callers get. NaN coordinates follow [`f32::total_cmp`]: negative
/// NaN first, positive NaN last.
pub fn sort_by_edge<E: HasBbox + Clone>(elements: &[E], edge: Edge) -> Vec<E> {
    let mut sorted = elements.iter().rev().cloned().collect::<Vec<_>>();
    sorted.sort_by(|a, b| a.bbox().edge(edge).total_cmp(&b.bbox().edge(edge)));
    sorted
}
