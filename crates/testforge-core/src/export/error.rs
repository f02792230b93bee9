use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing exported files.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid export file name: {0}")]
    InvalidFileName(String),

    #[error("Case {case_id} not found in suite {suite_id}")]
    CaseNotFound { suite_id: String, case_id: String },
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}
