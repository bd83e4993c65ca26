use tracing::*;

use crate::{error::TabledelimError, layout::DocumentPage};

/// Where the row or column delimiters of a table come from.
#[derive(Debug, Clone, PartialEq)]
pub enum Boundaries<E> {
    /// A selector run against the whole page with find-all semantics.
    Selector(String),
    /// Elements already picked by the caller, used as they are.
    Elements(Vec<E>),
}

impl<E: Clone> Boundaries<E> {
    /// Materializes the delimiter set. An empty result is not an error.
    pub fn resolve<P>(&self, page: &P) -> Result<Vec<E>, TabledelimError>
    where
        P: DocumentPage<Element = E>,
    {
        match self {
            Boundaries::Selector(selector) => {
                let elements = page.find_all(selector)?;
                debug!(
                    "selector `{}` resolved to {} boundaries",
                    selector,
                    elements.len()
                );
                Ok(elements)
            }
            Boundaries::Elements(elements) => Ok(elements.clone()),
        }
    }
}

impl<E> From<&str> for Boundaries<E> {
    fn from(selector: &str) -> Self {
        Boundaries::Selector(selector.to_string())
    }
}

impl<E> From<String> for Boundaries<E> {
    fn from(selector: String) -> Self {
        Boundaries::Selector(selector)
    }
}

impl<E> From<Vec<E>> for Boundaries<E> {
    fn from(elements: Vec<E>) -> Self {
        Boundaries::Elements(elements)
    }
}

/// A single element, or a selector resolved to its first match.
#[derive(Debug, Clone, PartialEq)]
pub enum Target<E> {
    Selector(String),
    Element(E),
}

impl<E> From<&str> for Target<E> {
    fn from(selector: &str) -> Self {
        Target::Selector(selector.to_string())
    }
}

impl<E> From<String> for Target<E> {
    fn from(selector: String) -> Self {
        Target::Selector(selector)
    }
}
