use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Whisk's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Whisk's crate-wide error type.
///
/// This is intentionally decoupled from `anyhow` so downstream libraries aren't forced to
/// adopt `anyhow` in their own public APIs.
#[derive(Debug, Error)]
pub enum Error {
    /// Batch mode was invoked without `--input_dir`.
    #[error("missing required flag --input_dir")]
    MissingInputDir,

    /// A recognized flag was given without its value.
    #[error("flag '{flag}' expects a value")]
    MissingValue { flag: String },

    /// The `--input_dir` value does not name an existing directory.
    #[error("'{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// The external transcriber could not be launched at all.
    #[error("failed to launch transcriber '{program}'")]
    TranscriberSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external transcriber ran but exited unsuccessfully.
    #[error("transcriber exited with {status}")]
    TranscriberFailed { status: ExitStatus },

    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Message(format!("{err:#}"))
    }
}
