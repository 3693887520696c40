//! Error type shared by every REST call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single backend request.
///
/// Callers decide severity: the session check treats any variant as an auth
/// failure, picture lookups only log, mutations surface [`ApiError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, body build).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("request rejected: status {status}")]
    Status { status: u16, message: Option<String> },

    /// A success response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// HTTP is only wired up in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Server-provided message when there is one, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}
