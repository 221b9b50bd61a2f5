use std::fmt;
use std::path::PathBuf;

/// One line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// The section title, e.g. `3. src/main.py`.
    pub title: String,
    /// The 1-based page on which the section header was drawn.
    pub page_number: usize,
}

/// Why a candidate file was left out of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file is larger than the configured limit.
    Oversized { size: u64, limit: u64 },
    /// The file content looks binary.
    Binary,
    /// The file could not be read or decoded; holds the error message.
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Oversized { size, limit } => {
                write!(f, "exceeds max file size ({} > {} bytes)", size, limit)
            }
            SkipReason::Binary => f.write_str("binary content"),
            SkipReason::Unreadable(message) => f.write_str(message),
        }
    }
}

/// A file that passed the extension check but was not rendered.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// The outcome of a complete run.
#[derive(Debug)]
pub struct RenderReport {
    /// Where the PDF was written.
    pub output: PathBuf,
    /// The table of contents, in section order.
    pub sections: Vec<TocEntry>,
    /// Files that were skipped with a diagnostic.
    pub skipped: Vec<SkippedFile>,
    /// Total number of pages in the written document.
    pub page_count: usize,
}
