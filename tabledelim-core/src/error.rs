use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum TabledelimError {
    #[snafu(display(
        "Invalid direction `{}`, expected exactly one of `row` or `col`",
        direction
    ))]
    InvalidDirection { direction: String },
    #[snafu(display(
        "Invalid edge `{}`, expected one of `left`, `top`, `right`, `bottom`",
        edge
    ))]
    InvalidEdge { edge: String },
    #[snafu(display("Invalid selector `{}`: {}", selector, message))]
    InvalidSelector { selector: String, message: String },
    #[snafu(display("Compile pattern `{}` error: {}", pattern, source))]
    Pattern {
        source: regex::Error,
        pattern: String,
    },
    #[snafu(display("No element matches selector `{}`", selector))]
    ElementNotFound { selector: String },
    #[snafu(display("Environment `{}` Not Found, error {}", name, source))]
    EnvNotFound {
        source: std::env::VarError,
        name: String,
    },
    #[snafu(display("Pdfium `{}` error {}", stage, source))]
    Pdfium {
        source: pdfium_render::prelude::PdfiumError,
        stage: String,
    },
    #[snafu(display("Page {} out of range for `{}` with {} pages", page, path, count))]
    PageOutOfRange {
        page: usize,
        count: usize,
        path: String,
    },
    #[snafu(display("Serialize table error: {}", source))]
    Json { source: serde_json::Error },
}
