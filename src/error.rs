//! Error types for the style marker.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    /// Bad command line; clap renders the usage text.
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("Error reading {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid curve: {reason}")]
    InvalidCurve { reason: String },

    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),
}

impl StyleError {
    pub fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_curve(reason: impl Into<String>) -> Self {
        Self::InvalidCurve {
            reason: reason.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(err) => err.exit_code(),
            _ => 1,
        }
    }
}

pub type StyleResult<T> = Result<T, StyleError>;
