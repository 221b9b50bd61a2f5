//! Top-down directory traversal.

use crate::error::Repo2PdfError;
use ignore::WalkBuilder;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A regular file found under the root.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    pub path: PathBuf,
    /// Path relative to the root, used as the section title.
    pub relative: PathBuf,
}

/// Lists every file under `root`.
///
/// All files of a directory come before the contents of its subdirectories;
/// files and subdirectories are each visited in name order. Nothing is
/// hidden: dot-files and ignore files get no special treatment, and symlinks
/// are not followed. Entries that cannot be read are logged and skipped.
pub fn walk_files(root: &Path) -> Vec<WalkedFile> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    // The walk is depth first, so directories arrive in pre-order. Numbering
    // them and stably sorting files by their parent's number yields the
    // top-down order.
    let mut dir_order: HashMap<PathBuf, usize> = HashMap::new();
    let mut files: Vec<(usize, WalkedFile)> = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                let error = Repo2PdfError::Walk(e.to_string());
                tracing::warn!("{}", error);
                continue;
            }
        };
        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        let path = entry.into_path();
        if is_dir {
            let next = dir_order.len();
            dir_order.entry(path).or_insert(next);
        } else if is_file {
            let parent = path
                .parent()
                .and_then(|p| dir_order.get(p))
                .copied()
                .unwrap_or(0);
            let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            files.push((parent, WalkedFile { path, relative }));
        }
    }
    files.sort_by_key(|(dir, _)| *dir);
    files.into_iter().map(|(_, file)| file).collect()
}
