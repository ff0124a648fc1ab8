//! Remote sheet API errors

use thiserror::Error;
use tracing::error;

use trackdesk_core::DomainError;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP status.
    #[error("Remote API returned HTTP {status}")]
    Status { status: u16, message: Option<String> },

    /// HTTP 200 but the body's own `status` is not 200.
    #[error("Remote API rejected the request with status {status}")]
    Rejected { status: i64, message: Option<String> },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Response has no '{0}' section")]
    MissingSection(&'static str),
}

impl RemoteError {
    /// Message supplied by the remote API, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Rejected { message, .. } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            _ => None,
        }
    }

    /// Converts to the domain error shown to the user: the server's message
    /// when it sent one, otherwise `fallback`.
    pub fn into_domain(self, fallback: &str) -> DomainError {
        error!(error = %self, "{}", fallback);
        let message = self.server_message().unwrap_or(fallback).to_string();
        DomainError::Remote(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins_over_fallback() {
        let err = RemoteError::Status { status: 500, message: Some("Sheet is locked".into()) };
        assert_eq!(
            err.into_domain("Failed to add ticket"),
            DomainError::Remote("Sheet is locked".into())
        );
    }

    #[test]
    fn test_fallback_when_server_is_silent() {
        let err = RemoteError::Rejected { status: 400, message: Some("  ".into()) };
        assert_eq!(
            err.into_domain("Failed to update ticket"),
            DomainError::Remote("Failed to update ticket".into())
        );

        let err = RemoteError::Decode("expected value".into());
        assert_eq!(
            err.into_domain("Failed to fetch tickets"),
            DomainError::Remote("Failed to fetch tickets".into())
        );
    }
}
