//! Snapshots a page of a PDF into an in-memory [`Page`].

use std::path::Path;

use pdfium_render::prelude::*;
use plsfix::fix_text;
use snafu::{ResultExt, ensure};
use tracing::*;

use crate::{
    analysis::{bbox::Bbox, kind::ElementKind},
    consts::*,
    error::{EnvNotFoundSnafu, PageOutOfRangeSnafu, PdfiumSnafu, TabledelimError},
    layout::{element::Layout, page::Page},
};

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Drop control characters from every text payload.
    pub trim_control_chars: bool,
    /// Repair mojibake and odd unicode in text segments.
    pub auto_clean_text: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            trim_control_chars: true,
            auto_clean_text: true,
        }
    }
}

pub struct PdfLoader {
    pub pdfium: Pdfium,
    pub config: ExtractConfig,
}

impl PdfLoader {
    /// Binds pdfium from the library path found in `PDFIUM_DYNAMIC_LIB_PATH`.
    pub fn with_config(config: ExtractConfig) -> Result<Self, TabledelimError> {
        let pdfium_lib_path =
            std::env::var(PDFIUM_LIB_PATH_ENV_NAME).context(EnvNotFoundSnafu {
                name: PDFIUM_LIB_PATH_ENV_NAME,
            })?;

        let pdfium = Pdfium::new(
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                &pdfium_lib_path,
            ))
            .context(PdfiumSnafu {
                stage: "load-dyn-lib",
            })?,
        );

        Ok(Self { pdfium, config })
    }

    /// Reads every glyph, text segment and path object of page `page_no`
    /// (0-based) into a [`Page`] with top-left origin.
    pub fn load_page(
        &self,
        path: &Path,
        password: Option<&str>,
        page_no: usize,
    ) -> Result<Page, TabledelimError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, password)
            .context(PdfiumSnafu {
                stage: "load-pdf-by-path",
            })?;

        let count = document.pages().len() as usize;
        check_page_index(path, page_no, count)?;

        let pdf_page = document
            .pages()
            .get(page_no as u16)
            .context(PdfiumSnafu { stage: "get-page" })?;
        let width = pdf_page.width().value;
        let height = pdf_page.height().value;

        let mut blocks = Vec::new();
        let page_text = pdf_page.text().context(PdfiumSnafu { stage: "text" })?;

        for ch in page_text.chars().iter() {
            let Some(unicode) = ch.unicode_char() else {
                continue;
            };
            if self.config.trim_control_chars && unicode.is_control() {
                continue;
            }
            let Ok(bounds) = ch.loose_bounds() else {
                continue;
            };
            blocks.push(Layout::new_char(rect_to_bbox(&bounds, height), unicode));
        }

        for segment in page_text.segments().iter() {
            let text = self.clean(segment.text());
            if text.trim().is_empty() {
                continue;
            }
            blocks.push(Layout::new_text(rect_to_bbox(&segment.bounds(), height), text));
        }

        for object in pdf_page.objects().iter() {
            if object.object_type() != PdfPageObjectType::Path {
                continue;
            }
            let bounds = object
                .bounds()
                .context(PdfiumSnafu {
                    stage: "object-bounds",
                })?
                .to_rect();
            let bbox = rect_to_bbox(&bounds, height);
            blocks.push(Layout::new(bbox, classify_path(&bbox), None));
        }

        let page = Page::with_blocks(width, height, page_no, blocks);
        info!(
            "loaded page {} of {} ({}x{}) with {} elements",
            page_no,
            path.display(),
            width,
            height,
            page.blocks.len()
        );

        Ok(page)
    }

    fn clean(&self, text: String) -> String {
        let text = if self.config.trim_control_chars {
            text.chars().filter(|c| !c.is_control()).collect()
        } else {
            text
        };

        if self.config.auto_clean_text {
            fix_text(&text, None)
        } else {
            text
        }
    }
}

fn check_page_index(path: &Path, page_no: usize, count: usize) -> Result<(), TabledelimError> {
    ensure!(
        page_no < count,
        PageOutOfRangeSnafu {
            page: page_no,
            count,
            path: path.to_string_lossy(),
        }
    );

    Ok(())
}

fn rect_to_bbox(rect: &PdfRect, page_height: f32) -> Bbox {
    Bbox::from_pdf_edges(
        rect.left().value,
        rect.bottom().value,
        rect.right().value,
        rect.top().value,
        page_height,
    )
}

/// Thin paths are ruling lines, anything else is a rectangle.
fn classify_path(bbox: &Bbox) -> ElementKind {
    if bbox.width().abs() < LINE_THICKNESS || bbox.height().abs() < LINE_THICKNESS {
        ElementKind::Line
    } else {
        ElementKind::Rect
    }
}
