use std::path::PathBuf;

/// Extensions rendered by default, compared case-insensitively and without the dot.
pub const DEFAULT_EXTENSIONS: [&str; 6] = ["py", "cpp", "c", "html", "css", "js"];
/// Files larger than this many bytes are skipped (5 MiB).
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;
/// Name of the PDF written into the scanned directory.
pub const OUTPUT_FILE_NAME: &str = "repository_code_structure.pdf";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub file_size_limit: u64,
}
impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            file_size_limit: MAX_FILE_SIZE,
        }
    }
}
#[derive(Debug, Default)]
pub struct RenderBuilder {
    options: RenderOptions,
}
impl RenderBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: RenderOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Replaces the extension allowlist. A leading dot is accepted and ignored.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }
    pub fn file_size_limit(mut self, limit: u64) -> Self {
        self.options.file_size_limit = limit;
        self
    }
    pub fn build(self) -> RenderOptions {
        self.options
    }
}
