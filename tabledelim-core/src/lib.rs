pub mod analysis;
pub mod consts;
pub mod error;
pub mod layout;
pub mod pdf;
pub mod table;

// Re-export commonly used types
pub use analysis::bbox::{Bbox, Edge};
pub use error::TabledelimError;
pub use layout::{DocumentPage, HasBbox, TextElement, TextRegion, element::Layout, page::Page};
pub use pdf::{ExtractConfig, PdfLoader};
pub use table::{
    Boundaries, Direction, Table, TableBbox, TableBboxBuilder, Target, delineate_regions,
    find_by_regex, slice_fitting_element, table_delim,
};
