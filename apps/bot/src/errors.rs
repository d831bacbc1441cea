use std::path::PathBuf;

use thiserror::Error;

use crate::submitter::SubmitError;

/// Application-level error type.
///
/// `Disqualified` and the two filesystem variants are fatal: `main` logs them
/// and exits. `Submit` is returned from the submission call and propagated.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ALERT! {company_address} is now a NO-GO zone")]
    Disqualified { company_address: String },

    #[error("Submission failed: {0}")]
    Submit(#[from] SubmitError),
}

impl AppError {
    /// Whether the error belongs to the tier that terminates the process
    /// without any further work.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AppError::Submit(_))
    }
}
