//! The paginated code listing.
//!
//! [`CodeDocument`] lays out sections and the table of contents onto a
//! [`Canvas`]. It only appends: every section starts a page, and the contents
//! pages come last because they need the final page numbers.

use crate::canvas::{Canvas, PdfCanvas};
use crate::error::Repo2PdfError;
use crate::font::Font;
use crate::layout::{
    BOTTOM_MARGIN, CELL_HEIGHT, CELL_PADDING, MARGIN, PAGE_HEIGHT, PAGE_WIDTH, normalize,
    text_area_width, wrap_text,
};
use crate::types::TocEntry;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Title on the running header of the first page.
pub const FIRST_PAGE_HEADER: &str = "Repository Code Structure";
/// Heading of the contents page.
pub const TOC_HEADING: &str = "Table of Contents";

const HEADER_FONT: Font = Font::bold(12.0);
const TITLE_FONT: Font = Font::bold(12.0);
const BODY_FONT: Font = Font::regular(10.0);
const TOC_HEADING_FONT: Font = Font::bold(14.0);
const TOC_FONT: Font = Font::regular(12.0);

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
}

pub struct CodeDocument<C: Canvas = PdfCanvas> {
    canvas: C,
    toc: Vec<TocEntry>,
    // Top of the next line, in points from the top of the page.
    cursor_y: f32,
}

impl CodeDocument<PdfCanvas> {
    pub fn new() -> Self {
        Self::with_canvas(PdfCanvas::new())
    }
}

impl Default for CodeDocument<PdfCanvas> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Canvas> CodeDocument<C> {
    /// Renders onto `canvas`, which is expected to be empty.
    pub fn with_canvas(canvas: C) -> Self {
        Self {
            canvas,
            toc: Vec::new(),
            cursor_y: MARGIN,
        }
    }

    /// Starts a page with `title` in bold followed by `content` as wrapped
    /// body text, and records the title against the page it starts on.
    pub fn add_section(&mut self, title: &str, content: &str) {
        self.new_page();
        let page_number = self.canvas.page_count();
        self.line(&normalize(title), TITLE_FONT, Align::Left);
        for line in wrap_text(&normalize(content), BODY_FONT, text_area_width()) {
            self.line(&line, BODY_FONT, Align::Left);
        }
        tracing::debug!("Added section '{}' on page {}", title, page_number);
        self.toc.push(TocEntry {
            title: title.to_string(),
            page_number,
        });
    }

    /// Starts a page listing every section recorded so far as
    /// `"{title} ..... {page}"`, continuing onto more pages if needed.
    pub fn add_table_of_contents(&mut self) {
        self.new_page();
        self.line(TOC_HEADING, TOC_HEADING_FONT, Align::Center);
        let lines: Vec<String> = self
            .toc
            .iter()
            .map(|entry| format!("{} ..... {}", normalize(&entry.title), entry.page_number))
            .collect();
        for line in lines {
            self.line(&line, TOC_FONT, Align::Left);
        }
    }

    /// Table of contents entries in the order sections were added.
    pub fn toc(&self) -> &[TocEntry] {
        &self.toc
    }

    pub fn page_count(&self) -> usize {
        self.canvas.page_count()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Serializes every page to `path`, replacing any existing file.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), Repo2PdfError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Repo2PdfError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.canvas
            .serialize(&mut writer)
            .map_err(|e| match e {
                Repo2PdfError::Output(source) => Repo2PdfError::io(path, source),
                other => other,
            })?;
        writer.flush().map_err(|e| Repo2PdfError::io(path, e))?;
        Ok(())
    }

    fn new_page(&mut self) {
        self.canvas.start_page();
        self.cursor_y = MARGIN;
        let header = match self.canvas.page_count() {
            1 => FIRST_PAGE_HEADER.to_string(),
            n => format!("Page {}", n),
        };
        self.draw_line(&header, HEADER_FONT, Align::Center);
    }

    fn line(&mut self, text: &str, font: Font, align: Align) {
        if self.cursor_y + CELL_HEIGHT > PAGE_HEIGHT - BOTTOM_MARGIN {
            self.new_page();
        }
        self.draw_line(text, font, align);
    }

    // Draws one cell-high line at the cursor and moves the cursor below it.
    fn draw_line(&mut self, text: &str, font: Font, align: Align) {
        let x = match align {
            Align::Left => MARGIN + CELL_PADDING,
            Align::Center => (PAGE_WIDTH - font.text_width(text)) / 2.0,
        };
        let baseline = self.cursor_y + 0.5 * CELL_HEIGHT + 0.3 * font.size;
        if !text.is_empty() {
            self.canvas.draw_text(x, baseline, font, text);
        }
        self.cursor_y += CELL_HEIGHT;
    }
}
