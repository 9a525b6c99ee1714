use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to run {program}: {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OptimizeError {
    /// Process exit status for a run that ended with this error.
    ///
    /// A lost report is reported separately from tool failures so that
    /// automation can tell "nothing was optimized" from "the summary is missing".
    pub fn exit_code(&self) -> u8 {
        match self {
            OptimizeError::ReportWrite { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, OptimizeError>;
