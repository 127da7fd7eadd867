use reqwest::StatusCode;
use shared::models::ErrorResponse;
use thiserror::Error;

/// Failure surfaced by the request pipeline.
///
/// `Display` is the user-facing message: for [`ApiError::Status`] that is the
/// server-supplied message or `request failed with status <code>`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, TLS, timeout, body read).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response parsed as JSON but did not match the expected record.
    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("stored token cannot be sent as an HTTP header")]
    InvalidToken,

    #[error("file is {size} bytes; uploads are limited to {limit} bytes")]
    PayloadTooLarge { size: u64, limit: u64 },
}

impl ApiError {
    /// Normalize a non-success response into [`ApiError::Status`].
    ///
    /// A body that is not a JSON object with a non-empty `message` falls back to
    /// the generic status message; it never masks the failure itself.
    #[must_use]
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorResponse>(body)
            .ok()
            .and_then(|error| error.message().map(str::to_string))
            .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));
        Self::Status { status, message }
    }

    /// HTTP status, when the server produced one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_used() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, br#"{"message":"bad input"}"#);
        assert_eq!(err.to_string(), "bad input");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_unparsable_body_falls_back_to_generic_message() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, b"<html>oops</html>");
        assert_eq!(err.to_string(), "request failed with status 400");

        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, b"");
        assert_eq!(err.to_string(), "request failed with status 500");
    }

    #[test]
    fn test_missing_or_non_string_message_falls_back() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, br#"{"status":"not_found"}"#);
        assert_eq!(err.to_string(), "request failed with status 404");

        let err = ApiError::from_status(StatusCode::CONFLICT, br#"{"message": 42}"#);
        assert_eq!(err.to_string(), "request failed with status 409");

        let err = ApiError::from_status(StatusCode::BAD_REQUEST, br#"["message"]"#);
        assert_eq!(err.to_string(), "request failed with status 400");
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, b"{}");
        assert!(err.is_unauthorized());
        assert!(!ApiError::InvalidToken.is_unauthorized());
    }
}
