use crate::error::Repo2PdfError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const INSPECT_LEN: u64 = 4096;

/// Reads a text file as UTF-8.
///
/// The first 4 KiB are inspected for binary content before the rest is read.
/// A leading byte order mark is dropped.
pub fn read_source(path: &Path) -> Result<String, Repo2PdfError> {
    let file = File::open(path).map_err(|e| Repo2PdfError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(INSPECT_LEN as usize);
    reader
        .by_ref()
        .take(INSPECT_LEN)
        .read_to_end(&mut bytes)
        .map_err(|e| Repo2PdfError::io(path, e))?;
    if content_inspector::inspect(&bytes).is_binary() {
        return Err(Repo2PdfError::Binary(path.to_path_buf()));
    }
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Repo2PdfError::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|source| Repo2PdfError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}
