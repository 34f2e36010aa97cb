use std::path::PathBuf;

use thiserror::Error;

/// Input the generator refuses to work with.
///
/// Shape ambiguity inside a valid sample is never an error; see
/// [`crate::inference`] for the fallbacks.
#[derive(Debug, Error)]
pub enum Error {
    #[error("class name `{0}` must start with an uppercase letter followed by letters or digits")]
    InvalidClassName(String),

    #[error("JSON input is empty")]
    EmptyJson,

    #[error("JSON input is not valid: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("top-level JSON array is empty, there is nothing to infer a class from")]
    EmptyArray,

    #[error("JSON pointer `{0}` does not match anything in the input")]
    PointerNotFound(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} already exists (pass --force to overwrite)", .0.display())]
    OutputExists(PathBuf),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
