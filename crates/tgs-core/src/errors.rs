use std::path::PathBuf;

/// Faults raised while trying to talk to the Bot API.
///
/// These are the cases where no usable response exists: the request never left,
/// never came back, the document to upload could not be read, or (for calls
/// that only check delivery) the server answered with a non-2xx status.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid path: {path}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered, but the HTTP status itself marks the call as failed.
    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why an operation produced no successful result.
///
/// `Fault` is the only variant that went through the diagnostics hook; the rest
/// are answers from the service that did not look like success.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    #[error(transparent)]
    Fault(#[from] Error),

    #[error("unexpected http status {0}")]
    Status(u16),

    #[error(
        "request not acknowledged (code {error_code:?}): {}",
        description.as_deref().unwrap_or("no description")
    )]
    NotAcknowledged {
        error_code: Option<i64>,
        description: Option<String>,
    },

    #[error("acknowledged response carried no result")]
    MissingResult,
}

impl Failure {
    /// True when the request failed before a response was obtained.
    pub fn is_fault(&self) -> bool {
        matches!(self, Failure::Fault(_))
    }
}
