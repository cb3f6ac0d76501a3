//! Error types.
//!
//! Every operation aborts on the first failure and propagates it to the
//! binary, which prints it once. Nothing is retried.

use thiserror::Error;

/// Top-level error returned by every capi operation.
#[derive(Error, Debug)]
pub enum Error {
    /// The Azure CLI failed or answered with something unusable.
    #[error("Azure CLI: {0}")]
    Remote(#[from] RemoteError),

    /// The request itself is malformed.
    #[error("{0}")]
    InvalidArgument(String),

    /// A variable group could not be resolved in any candidate project.
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures talking to Azure DevOps through `az`.
///
/// The core treats all of these as one kind; the variants only shape the
/// message shown to the user.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("az executable not found; install the Azure CLI and run `az login`")]
    NotInstalled,

    #[error("failed to run az: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("{stderr}")]
    CommandFailed { stderr: String },

    #[error("{stderr}")]
    MissingExtension { stderr: String },

    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("unexpected response payload: {0}")]
    UnexpectedPayload(#[source] serde_json::Error),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("no organization configured")]
    MissingOrganization,
}

impl Error {
    /// Build an `InvalidArgument` error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a `NotFound` error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
