use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-success responses.
///
/// Both fields are optional: the client only trusts `message` when it is
/// present and non-empty.
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Machine-readable status label (e.g. `bad_request`).
    #[serde(default)]
    pub status: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// The server-supplied message, if it carries any text.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}
