use crate::canvas::Canvas;
use crate::document::CodeDocument;
use crate::error::Repo2PdfError;
use crate::filter::{FileFilter, FilterDecision};
use crate::options::{OUTPUT_FILE_NAME, RenderOptions};
use crate::source::read_source;
use crate::types::{RenderReport, SkipReason, SkippedFile};
use crate::walker::walk_files;
use std::fs;
use std::path::{Path, PathBuf};

/// Expands a leading `~` to the current user's home directory.
///
/// Only the bare `~` component is expanded; `~user` forms name another
/// user's home and are returned unchanged.
pub fn expand_home(path: &Path) -> Result<PathBuf, Repo2PdfError> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = dirs::home_dir().ok_or(Repo2PdfError::NoHomeDirectory)?;
    Ok(home.join(rest))
}

/// Where the PDF for `root` is written.
pub fn output_path(root: &Path) -> Result<PathBuf, Repo2PdfError> {
    expand_home(&root.join(OUTPUT_FILE_NAME))
}

/// Appends one section per accepted file under `root` to `document`, in
/// traversal order, and returns the files that were skipped with a
/// diagnostic.
pub fn add_sections<C: Canvas>(
    document: &mut CodeDocument<C>,
    root: &Path,
    options: &RenderOptions,
) -> Vec<SkippedFile> {
    let filter = FileFilter::new(options);
    let mut skipped = Vec::new();
    let mut counter = 1;
    for file in walk_files(root) {
        let size = match fs::metadata(&file.path) {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                let error = Repo2PdfError::io(&file.path, e);
                tracing::warn!("Error reading {}: {}", file.path.display(), error);
                skipped.push(SkippedFile {
                    path: file.path,
                    reason: SkipReason::Unreadable(error.to_string()),
                });
                continue;
            }
        };
        match filter.check(&file.path, size) {
            FilterDecision::Accept => {}
            FilterDecision::Ignore => {
                tracing::debug!("Ignoring {}: extension not allowed", file.path.display());
                continue;
            }
            FilterDecision::Reject(reason) => {
                tracing::warn!("Skipping {}: {}", file.path.display(), reason);
                skipped.push(SkippedFile {
                    path: file.path,
                    reason,
                });
                continue;
            }
        }
        let content = match read_source(&file.path) {
            Ok(content) => content,
            Err(Repo2PdfError::Binary(path)) => {
                tracing::warn!("Skipping {}: binary content", path.display());
                skipped.push(SkippedFile {
                    path,
                    reason: SkipReason::Binary,
                });
                continue;
            }
            Err(e) => {
                tracing::warn!("Error reading {}: {}", file.path.display(), e);
                skipped.push(SkippedFile {
                    path: file.path,
                    reason: SkipReason::Unreadable(e.to_string()),
                });
                continue;
            }
        };
        let title = format!("{}. {}", counter, file.relative.display());
        document.add_section(&title, &content);
        counter += 1;
    }
    skipped
}

/// Renders every accepted file under `options.root` into
/// `<root>/repository_code_structure.pdf`.
///
/// Per-file problems are logged and skipped; an invalid root or a failed
/// write ends the run with an error.
pub fn render_repository(options: RenderOptions) -> Result<RenderReport, Repo2PdfError> {
    let root = expand_home(&options.root)?;
    if !root.is_dir() {
        return Err(Repo2PdfError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    tracing::debug!("Rendering repository at {}", root.display());

    let mut document = CodeDocument::new();
    let skipped = add_sections(&mut document, &root, &options);
    document.add_table_of_contents();

    let output = output_path(&root)?;
    document.write(&output)?;
    tracing::info!(
        "Wrote {} sections on {} pages to {}",
        document.toc().len(),
        document.page_count(),
        output.display()
    );

    Ok(RenderReport {
        output,
        sections: document.toc().to_vec(),
        skipped,
        page_count: document.page_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_without_tilde_are_unchanged() {
        let path = Path::new("/srv/repo");
        assert_eq!(expand_home(path).unwrap(), path);
        assert_eq!(expand_home(Path::new("a/~")).unwrap(), Path::new("a/~"));
        assert_eq!(
            expand_home(Path::new("~root/x")).unwrap(),
            Path::new("~root/x")
        );
    }

    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_home(Path::new("~")).unwrap(), home);
        assert_eq!(
            expand_home(Path::new("~/code")).unwrap(),
            home.join("code")
        );
    }

    #[test]
    fn output_lands_in_root() {
        assert_eq!(
            output_path(Path::new("/srv/repo")).unwrap(),
            Path::new("/srv/repo").join(OUTPUT_FILE_NAME)
        );
    }
}
