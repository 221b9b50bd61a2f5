//! # repo2pdf
//!
//! `repo2pdf` walks a directory tree, keeps the source files whose extension is
//! on an allowlist and whose size is under a cap, and renders each one as a
//! section of a paginated PDF. A table of contents listing every section and
//! its starting page is appended once all sections are in place.
//!
//! Files that are too large, binary, or not valid UTF-8 are skipped with a
//! log line; only an invalid root or a failed write stops the run.
//!
//! # Example
//!
//! ```no_run
//! use repo2pdf::{RenderBuilder, render_repository};
//!
//! let options = RenderBuilder::new("~/projects/demo").build();
//! let report = render_repository(options).expect("Failed to render repository");
//!
//! for entry in &report.sections {
//!     println!("{} ..... {}", entry.title, entry.page_number);
//! }
//! println!("PDF generated: {}", report.output.display());
//! ```

mod canvas;
mod document;
mod engine;
mod error;
mod filter;
mod font;
mod layout;
mod options;
mod source;
mod types;
mod walker;

pub use canvas::{Canvas, PdfCanvas};
pub use document::{CodeDocument, FIRST_PAGE_HEADER, TOC_HEADING};
pub use engine::{add_sections, expand_home, output_path, render_repository};
pub use error::Repo2PdfError;
pub use filter::{FileFilter, FilterDecision};
pub use font::{Font, FontStyle};
pub use options::{DEFAULT_EXTENSIONS, MAX_FILE_SIZE, OUTPUT_FILE_NAME, RenderBuilder, RenderOptions};
pub use source::read_source;
pub use types::{RenderReport, SkipReason, SkippedFile, TocEntry};
pub use walker::{WalkedFile, walk_files};
