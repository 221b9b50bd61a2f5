use crate::options::RenderOptions;
use crate::types::SkipReason;
use std::path::Path;

/// Outcome of checking a file against the allowlist and size cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    Accept,
    /// Too large; reported to the user.
    Reject(SkipReason),
    /// Extension not on the allowlist; dropped silently.
    Ignore,
}

/// Decides which walked files become sections.
#[derive(Debug, Clone)]
pub struct FileFilter {
    extensions: Vec<String>,
    size_limit: u64,
}

impl FileFilter {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            extensions: options
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            size_limit: options.file_size_limit,
        }
    }

    /// Checks the size first, so an oversized file is reported whatever its
    /// extension.
    pub fn check(&self, path: &Path, size: u64) -> FilterDecision {
        if size > self.size_limit {
            return FilterDecision::Reject(SkipReason::Oversized {
                size,
                limit: self.size_limit,
            });
        }
        if self.extension_allowed(path) {
            FilterDecision::Accept
        } else {
            FilterDecision::Ignore
        }
    }

    /// Whether the extension is on the allowlist, ignoring case. Dot-files
    /// such as `.py` have no extension.
    pub fn extension_allowed(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| {
                let e = e.to_ascii_lowercase();
                self.extensions.iter().any(|allowed| *allowed == e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RenderBuilder;

    fn filter(limit: u64) -> FileFilter {
        FileFilter::new(&RenderBuilder::new(".").file_size_limit(limit).build())
    }

    #[test]
    fn extension_match_ignores_case() {
        let f = filter(100);
        assert_eq!(f.check(Path::new("src/Main.PY"), 10), FilterDecision::Accept);
        assert_eq!(f.check(Path::new("x.Cpp"), 10), FilterDecision::Accept);
    }

    #[test]
    fn unknown_and_missing_extensions_are_ignored() {
        let f = filter(100);
        assert_eq!(f.check(Path::new("notes.txt"), 1), FilterDecision::Ignore);
        assert_eq!(f.check(Path::new("Makefile"), 1), FilterDecision::Ignore);
        assert_eq!(f.check(Path::new(".py"), 1), FilterDecision::Ignore);
        assert_eq!(f.check(Path::new("archive.py.bak"), 1), FilterDecision::Ignore);
    }

    #[test]
    fn size_cap_is_inclusive_and_checked_first() {
        let f = filter(100);
        assert_eq!(f.check(Path::new("a.js"), 100), FilterDecision::Accept);
        let oversized = FilterDecision::Reject(SkipReason::Oversized {
            size: 101,
            limit: 100,
        });
        assert_eq!(f.check(Path::new("a.js"), 101), oversized);
        assert_eq!(f.check(Path::new("a.bin"), 101), oversized);
    }
}
