//! Errors raised while talking to the completion/validation backend.

/// Failures of a backend round-trip.
///
/// Completion and linting never surface these to the editor: they degrade to
/// an empty result and log a warning. Callers using a [`crate::Backend`]
/// directly get them unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection refused, timeout, TLS failure...
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// The body could not be decoded into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid backend URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl Error {
    /// Exit code used by the command-line front end.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Network(_) => 3,
            Error::InvalidUrl { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
