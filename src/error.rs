// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything a scan can fail with.
///
/// Variants fall into four kinds (see [`ErrorKind`]) so frontends can tell a
/// network problem from a page that changed shape.
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not fetch odds page {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read saved page {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unrecognized odds page: {0}")]
    Parse(String),

    #[error("odds state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Parse,
    InvalidInput,
    Output,
}

impl Error {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Fetch { .. } | Error::Read { .. } => ErrorKind::Fetch,
            Error::Parse(_) | Error::Json(_) => ErrorKind::Parse,
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
            Error::Output(_) => ErrorKind::Output,
        }
    }

    /// Process exit code for the CLI. 2 matches clap's usage-error code.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::InvalidInput => 2,
            ErrorKind::Fetch => 3,
            ErrorKind::Parse => 4,
            ErrorKind::Output => 5,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
