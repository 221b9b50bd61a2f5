use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum Repo2PdfError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Binary file: {0}")]
    Binary(PathBuf),
    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
    #[error("Could not determine the home directory")]
    NoHomeDirectory,
}
impl Repo2PdfError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Repo2PdfError::Io {
            path: path.into(),
            source,
        }
    }
}
