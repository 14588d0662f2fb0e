use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Error as JsonError;

/// Failure of one request/response exchange, below the application level.
///
/// A decoded response carrying `success: false` is not represented here; the
/// caller that owns the response shape decides what that means.
#[derive(Debug)]
pub enum FpvApiError {
    InvalidBaseUrl(String),
    InvalidHeader(String),
    /// The payload could not be encoded. Raised before any network activity.
    Serialize(JsonError),
    /// Connection, timeout or I/O failure; no response was obtained.
    Request(reqwest::Error),
    /// The server answered with anything but 200. The body is kept verbatim.
    Status {
        status: StatusCode,
        body: String,
    },
    /// A 200 body did not match the expected response shape.
    Decode(JsonError),
    /// The blocking bridge could not start its executor.
    Runtime(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl FpvApiError {
    /// Status code of a non-success response, if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(error) if error.is_timeout())
    }

    /// The `error` string of a JSON status body, when the server sent one.
    pub fn server_message(&self) -> Option<String> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .filter(|message| !message.trim().is_empty())
    }
}

impl fmt::Display for FpvApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBaseUrl(value) => write!(f, "invalid base URL: {value}"),
            Self::InvalidHeader(message) => write!(f, "{message}"),
            Self::Serialize(error) => write!(f, "failed to marshal request: {error}"),
            Self::Request(error) if error.is_timeout() => {
                write!(f, "request timed out: {error}")
            }
            Self::Request(error) => write!(f, "failed to make request: {error}"),
            Self::Status { status, body } => {
                write!(f, "API returned status {}: {body}", status.as_u16())
            }
            Self::Decode(error) => write!(f, "failed to unmarshal response: {error}"),
            Self::Runtime(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for FpvApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(error) | Self::Decode(error) => Some(error),
            Self::Request(error) => Some(error),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FpvApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error)
    }
}
