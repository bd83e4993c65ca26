use std::cmp::Ordering;

use crate::{
    analysis::{bbox::Bbox, kind::ElementKind},
    consts::LINE_Y_TOLERANCE,
    error::TabledelimError,
};

use super::{DocumentPage, HasBbox, TextRegion, element::Layout, selector::Selector};

/// A page held in memory: its size and every element found on it.
///
/// `blocks` is kept in reading order (top to bottom, then left to right), which
/// is the order `find` and `find_all` report elements in.
#[derive(Debug, Clone)]
pub struct Page {
    pub width: f32,
    pub height: f32,
    pub blocks: Vec<Layout>,
    pub page_no: usize,
}

impl Page {
    pub fn new(width: f32, height: f32, page_no: usize) -> Self {
        Self {
            width,
            height,
            blocks: Vec::new(),
            page_no,
        }
    }

    pub fn with_blocks(width: f32, height: f32, page_no: usize, blocks: Vec<Layout>) -> Self {
        let mut page = Self::new(width, height, page_no);
        page.extend(blocks);
        page
    }

    /// Adds an element, stamping it with this page's number and the next id.
    pub fn push(&mut self, mut block: Layout) {
        block.page_no = self.page_no;
        block.bbox_id = self.blocks.len();
        let idx = self
            .blocks
            .partition_point(|other| reading_order(other, &block) == Ordering::Less);
        self.blocks.insert(idx, block);
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Layout>) {
        for mut block in blocks {
            block.page_no = self.page_no;
            block.bbox_id = self.blocks.len();
            self.blocks.push(block);
        }
        self.blocks.sort_by(reading_order);
    }

    pub fn bbox(&self) -> Bbox {
        Bbox::from_ltrb(0.0, 0.0, self.width, self.height)
    }

    fn select<'a>(
        &'a self,
        selector: &str,
        within: Option<&'a Bbox>,
    ) -> Result<impl Iterator<Item = &'a Layout> + 'a, TabledelimError> {
        let selector = Selector::parse(selector)?;
        Ok(self.blocks.iter().filter(move |block| {
            within.is_none_or(|bbox| bbox.contains_point(block.bbox.center()))
                && selector.matches(*block)
        }))
    }
}

impl DocumentPage for Page {
    type Element = Layout;
    type Region<'a>
        = PageRegion<'a>
    where
        Self: 'a;

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn find(&self, selector: &str) -> Result<Option<Layout>, TabledelimError> {
        Ok(self.select(selector, None)?.next().cloned())
    }

    fn find_all(&self, selector: &str) -> Result<Vec<Layout>, TabledelimError> {
        Ok(self.select(selector, None)?.cloned().collect())
    }

    fn create_region(&self, bbox: Bbox) -> PageRegion<'_> {
        PageRegion { page: self, bbox }
    }
}

/// A rectangular window onto a [`Page`].
///
/// An element belongs to the region when the center of its bbox lies inside
/// the region, edges included.
#[derive(Debug, Clone, Copy)]
pub struct PageRegion<'a> {
    page: &'a Page,
    bbox: Bbox,
}

impl PageRegion<'_> {
    fn members(&self, kind: ElementKind) -> Vec<&Layout> {
        self.page
            .blocks
            .iter()
            .filter(|block| block.kind == kind && block.text.is_some())
            .filter(|block| self.bbox.contains_point(block.bbox.center()))
            .collect()
    }
}

impl HasBbox for PageRegion<'_> {
    fn bbox(&self) -> Bbox {
        self.bbox
    }
}

impl TextRegion for PageRegion<'_> {
    type Element = Layout;

    /// Joins the text inside the region line by line.
    ///
    /// Glyphs are used when the page has any, text runs otherwise. Glyphs of a
    /// line are concatenated as they are, text runs are separated by a space.
    fn extract_text(&self) -> Result<Option<String>, TabledelimError> {
        let has_chars = self
            .page
            .blocks
            .iter()
            .any(|block| block.kind == ElementKind::Char);
        let (kind, separator) = if has_chars {
            (ElementKind::Char, "")
        } else {
            (ElementKind::Text, " ")
        };

        let lines = group_lines(self.members(kind));
        let text = lines
            .iter()
            .map(|line| {
                line.iter()
                    .filter_map(|block| block.text.as_deref())
                    .collect::<Vec<_>>()
                    .join(separator)
            })
            .collect::<Vec<_>>()
            .join("\n");

        let text = text.trim();
        Ok((!text.is_empty()).then(|| text.to_string()))
    }

    fn find_all(&self, selector: &str) -> Result<Vec<Layout>, TabledelimError> {
        Ok(self
            .page
            .select(selector, Some(&self.bbox))?
            .cloned()
            .collect())
    }
}

fn reading_order(a: &Layout, b: &Layout) -> Ordering {
    a.bbox
        .top()
        .total_cmp(&b.bbox.top())
        .then_with(|| a.bbox.left().total_cmp(&b.bbox.left()))
        .then_with(|| a.bbox_id.cmp(&b.bbox_id))
}

// Blocks arrive in reading order; a new line starts once a block sits more
// than LINE_Y_TOLERANCE below the first block of the current line.
fn group_lines(blocks: Vec<&Layout>) -> Vec<Vec<&Layout>> {
    let mut lines: Vec<Vec<&Layout>> = Vec::new();
    for block in blocks {
        let same_line = lines.last().is_some_and(|line| {
            (block.bbox.top() - line[0].bbox.top()).abs() <= LINE_Y_TOLERANCE
        });
        match lines.last_mut() {
            Some(line) if same_line => line.push(block),
            _ => lines.push(vec![block]),
        }
    }

    for line in lines.iter_mut() {
        line.sort_by(|a, b| {
            a.bbox
                .left()
                .total_cmp(&b.bbox.left())
                .then_with(|| a.bbox_id.cmp(&b.bbox_id))
        });
    }

    lines
}
