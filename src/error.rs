use fpv_api::{FpvApiError, StatusCode};
use thiserror::Error;

/// Failure of a path-builder operation.
///
/// Whatever the variant, the session that raised it is left exactly as it was
/// before the call.
#[derive(Debug, Error)]
pub enum PathBuilderError {
    /// Serialization, transport, non-200 status or decode failure.
    #[error(transparent)]
    Api(#[from] FpvApiError),

    /// The service answered but reported `success: false`.
    #[error("{}", rejection_text(.message.as_deref()))]
    Rejected { message: Option<String> },

    #[error("no parts provided to add")]
    NoParts,
}

impl PathBuilderError {
    #[must_use]
    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected { message }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Status code carried by a non-success HTTP response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(error) => error.status(),
            _ => None,
        }
    }
}

fn rejection_text(message: Option<&str>) -> String {
    match message {
        Some(message) => format!("API error: {message}"),
        None => "API request failed".to_string(),
    }
}
