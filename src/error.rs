use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DraftmeError {
    #[error("not a directory: {0}")]
    InvalidRoot(PathBuf),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
impl DraftmeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DraftmeError::Io {
            path: path.into(),
            source,
        }
    }
}
