//! Left/right page-half text reconstruction on top of pdf-extract glyph output.

use pdf_extract::{MediaBox, OutputDev, OutputError, Transform};
use tracing::{debug, trace};

/// Text of one page, extracted separately from its left and right halves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageColumns {
    /// Page number (1-indexed).
    pub number: u32,
    /// Text of the left half.
    pub left: String,
    /// Text of the right half.
    pub right: String,
}

impl PageColumns {
    /// Page text in reading order: left half, then right half, each newline-terminated.
    pub fn text(&self) -> String {
        format!("{}\n{}\n", self.left, self.right)
    }
}

/// A positioned glyph in PDF user space.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Origin x.
    pub x: f64,
    /// Baseline y.
    pub y: f64,
    /// Advance width in user space.
    pub advance: f64,
    /// Effective font size in user space.
    pub font_size: f64,
    /// Decoded text of the glyph.
    pub text: String,
}

/// Baselines closer than this (user space units) share a line.
const LINE_TOLERANCE: f64 = 3.0;

/// Collects the glyphs of one half and rebuilds its text by position.
///
/// Glyphs are grouped into lines by baseline, top line first, and every line
/// is read left to right, whatever order the content stream drew them in.
#[derive(Debug, Clone, Default)]
pub struct ColumnText {
    glyphs: Vec<Glyph>,
}

impl ColumnText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, glyph: &Glyph) {
        self.glyphs.push(glyph.clone());
    }

    /// Glyphs grouped into lines, top to bottom, each line sorted by x.
    fn lines(mut self) -> Vec<Vec<Glyph>> {
        // y grows upwards in PDF user space
        self.glyphs.sort_by(|a, b| b.y.total_cmp(&a.y));

        let mut lines: Vec<Vec<Glyph>> = Vec::new();
        let mut last_y = 0.0;
        for glyph in self.glyphs {
            let y = glyph.y;
            match lines.last_mut() {
                Some(line) if last_y - y <= LINE_TOLERANCE => line.push(glyph),
                _ => lines.push(vec![glyph]),
            }
            last_y = y;
        }

        for line in &mut lines {
            line.sort_by(|a, b| a.x.total_cmp(&b.x));
        }
        lines
    }

    /// Extracted text, one line per baseline, trailing whitespace removed.
    pub fn finish(self) -> String {
        self.lines()
            .iter()
            .map(|line| line_text(line))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Text of one line, with a space wherever the gap after a glyph exceeds 0.1x the font size.
fn line_text(line: &[Glyph]) -> String {
    let mut text = String::new();
    let mut prev: Option<&Glyph> = None;

    for glyph in line {
        if let Some(prev) = prev {
            let gap = glyph.x - (prev.x + prev.advance);
            if gap > glyph.font_size * 0.1 && !is_blank(prev) && !is_blank(glyph) {
                text.push(' ');
            }
        }
        text.push_str(&glyph.text);
        prev = Some(glyph);
    }

    text.trim_end().to_string()
}

fn is_blank(glyph: &Glyph) -> bool {
    glyph.text.chars().all(char::is_whitespace)
}

/// `OutputDev` that routes each glyph to the left or right half of its page.
///
/// A glyph belongs to the left half when its origin lies strictly before the
/// horizontal midpoint of the media box.
pub struct ColumnSplitter {
    split: bool,
    midpoint: f64,
    page: Option<(u32, ColumnText, ColumnText)>,
    pages: Vec<PageColumns>,
}

impl ColumnSplitter {
    /// Create a splitter. With `split == false` the whole page goes to the left half.
    pub fn new(split: bool) -> Self {
        Self {
            split,
            midpoint: 0.0,
            page: None,
            pages: Vec::new(),
        }
    }

    /// Start a page spanning `llx..urx` horizontally.
    pub fn start_page(&mut self, number: u32, llx: f64, urx: f64) {
        self.finish_page();
        self.midpoint = (llx + urx) / 2.0;
        self.page = Some((number, ColumnText::new(), ColumnText::new()));
        trace!("Page {} midpoint at x={:.2}", number, self.midpoint);
    }

    /// Route a glyph of the current page. Glyphs outside a page are ignored.
    pub fn push_glyph(&mut self, glyph: &Glyph) {
        if let Some((_, left, right)) = self.page.as_mut() {
            if !self.split || glyph.x < self.midpoint {
                left.push(glyph);
            } else {
                right.push(glyph);
            }
        }
    }

    /// Close the current page, if any.
    pub fn finish_page(&mut self) {
        if let Some((number, left, right)) = self.page.take() {
            let columns = PageColumns {
                number,
                left: left.finish(),
                right: right.finish(),
            };
            debug!(
                "Page {}: {} chars left, {} chars right",
                number,
                columns.left.len(),
                columns.right.len()
            );
            self.pages.push(columns);
        }
    }

    /// All finished pages in output order.
    pub fn into_pages(mut self) -> Vec<PageColumns> {
        self.finish_page();
        self.pages
    }
}

impl OutputDev for ColumnSplitter {
    fn begin_page(
        &mut self,
        page_num: u32,
        media_box: &MediaBox,
        _art_box: Option<(f64, f64, f64, f64)>,
    ) -> Result<(), OutputError> {
        self.start_page(page_num, media_box.llx, media_box.urx);
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), OutputError> {
        self.finish_page();
        Ok(())
    }

    fn output_character(
        &mut self,
        trm: &Transform,
        width: f64,
        _spacing: f64,
        font_size: f64,
        char: &str,
    ) -> Result<(), OutputError> {
        // Font size scaled by the text rendering matrix.
        let sx = font_size * trm.m11 + font_size * trm.m21;
        let sy = font_size * trm.m12 + font_size * trm.m22;
        let scaled_size = (sx * sy).abs().sqrt();

        let glyph = Glyph {
            x: trm.m31,
            y: trm.m32,
            advance: width * scaled_size,
            font_size: scaled_size,
            text: char.to_string(),
        };
        self.push_glyph(&glyph);
        Ok(())
    }

    fn begin_word(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn end_word(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn end_line(&mut self) -> Result<(), OutputError> {
        Ok(())
    }
}
