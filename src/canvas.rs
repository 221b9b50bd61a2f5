//! Drawing surface the document renders onto.
//!
//! [`Canvas`] is the seam between page layout and the output format.
//! [`PdfCanvas`] builds a PDF with `lopdf`; other implementations can record
//! draw calls instead.

use crate::error::Repo2PdfError;
use crate::font::{Font, FontStyle, encode_win_ansi};
use crate::layout::{PAGE_HEIGHT, PAGE_WIDTH};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use std::io::Write;

/// A paginated surface addressed in points from the top-left corner.
pub trait Canvas {
    /// Appends a blank page; later draws land on it.
    fn start_page(&mut self);
    /// Draws one line of text with its baseline at `(x, y)`.
    fn draw_text(&mut self, x: f32, y: f32, font: Font, text: &str);
    /// Number of pages started so far.
    fn page_count(&self) -> usize;
    /// Writes the finished document.
    fn serialize(&self, out: &mut dyn Write) -> Result<(), Repo2PdfError>;
}

/// An in-memory PDF built with `lopdf`.
///
/// Page content is kept as operation lists until [`Canvas::serialize`], which
/// assembles a fresh object graph each time, so serializing twice yields the
/// same document.
#[derive(Debug, Default)]
pub struct PdfCanvas {
    pages: Vec<Vec<Operation>>,
}

impl PdfCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_document(&self) -> Result<Document, Repo2PdfError> {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut fonts = Dictionary::new();
        for style in [FontStyle::Regular, FontStyle::Bold] {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => style.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(style.resource_name(), font_id);
        }
        let resources_id = document.add_object(dictionary! { "Font" => fonts });

        let mut kids = Vec::with_capacity(self.pages.len());
        for operations in &self.pages {
            let content = Content {
                operations: operations.clone(),
            };
            let content_id = document.add_object(Stream::new(Dictionary::new(), content.encode()?));
            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::from(page_id));
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.pages.len() as i64,
        };
        document
            .objects
            .insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);
        document.compress();
        Ok(document)
    }
}

impl Canvas for PdfCanvas {
    fn start_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn draw_text(&mut self, x: f32, y: f32, font: Font, text: &str) {
        if self.pages.is_empty() {
            self.start_page();
        }
        let Some(page) = self.pages.last_mut() else {
            return;
        };
        page.push(Operation::new("BT", vec![]));
        page.push(Operation::new(
            "Tf",
            vec![font.style.resource_name().into(), font.size.into()],
        ));
        page.push(Operation::new("Td", vec![x.into(), (PAGE_HEIGHT - y).into()]));
        page.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_win_ansi(text))],
        ));
        page.push(Operation::new("ET", vec![]));
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn serialize(&self, out: &mut dyn Write) -> Result<(), Repo2PdfError> {
        let mut document = self.build_document()?;
        let mut bytes = Vec::new();
        document.save_to(&mut bytes)?;
        out.write_all(&bytes)?;
        Ok(())
    }
}
