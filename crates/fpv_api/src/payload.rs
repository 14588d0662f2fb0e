use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Path grammar profile the server validates against.
///
/// The server owns the mapping from names to grammars; names it does not
/// list here travel as [`Service::Other`] and are judged server-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Service {
    Windows,
    Macos,
    Linux,
    Dropbox,
    Box,
    Egnyte,
    Onedrive,
    Sharepoint,
    Sharefile,
    Other(String),
}

impl Service {
    /// Profiles the reference service is known to map.
    pub const KNOWN: [Service; 9] = [
        Service::Windows,
        Service::Macos,
        Service::Linux,
        Service::Dropbox,
        Service::Box,
        Service::Egnyte,
        Service::Onedrive,
        Service::Sharepoint,
        Service::Sharefile,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Windows => "windows",
            Self::Macos => "macos",
            Self::Linux => "linux",
            Self::Dropbox => "dropbox",
            Self::Box => "box",
            Self::Egnyte => "egnyte",
            Self::Onedrive => "onedrive",
            Self::Sharepoint => "sharepoint",
            Self::Sharefile => "sharefile",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Service {
    fn from(value: &str) -> Self {
        let name = value.trim();
        Self::KNOWN
            .into_iter()
            .find(|service| service.as_str().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| Self::Other(name.to_string()))
    }
}

impl FromStr for Service {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(value))
    }
}

impl Serialize for Service {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Service {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from(name.as_str()))
    }
}

/// Lists the server may send as `null` or leave out; both read as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}

/// Body of `POST /path/add`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPartRequest {
    pub service: Service,
    pub base_path: String,
    pub parts: Vec<String>,
    pub errors: Vec<Value>,
    /// Always sent as `true` by the session.
    pub validate: bool,
    pub relative: bool,
    pub file_added: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sep: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPartResponse {
    pub success: bool,
    #[serde(default)]
    pub updated_path: String,
    /// Errors introduced by this addition only.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub new_errors: Vec<Value>,
    /// Full accumulated error list after this addition.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub all_errors: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub path_parts: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /path/remove`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovePartRequest {
    pub service: Service,
    pub base_path: String,
    pub part_index: usize,
    pub errors: Vec<Value>,
    pub relative: bool,
    pub file_added: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sep: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovePartResponse {
    pub success: bool,
    #[serde(default)]
    pub updated_path: String,
    /// Full error list after the removal, not a delta.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub remaining_errors: Vec<Value>,
    #[serde(default)]
    pub removed_part: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub path_parts: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /path/build`: a whole path assembled in one exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPathRequest {
    pub service: Service,
    pub root_path: String,
    pub path_parts: Vec<String>,
    pub relative: bool,
    pub file_added: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sep: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPathResponse {
    pub success: bool,
    #[serde(default)]
    pub final_path: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub all_errors: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub step_errors: Vec<BuildStepErrors>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub path_parts: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Issues attributed to one step of a build, `step` counting from 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildStepErrors {
    pub step: usize,
    pub part: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub issues: Vec<Value>,
}

/// Body of `POST /clean`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRequest {
    pub service: Service,
    pub path: String,
    pub relative: bool,
    pub file_added: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sep: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanResponse {
    pub success: bool,
    #[serde(default)]
    pub cleaned_path: String,
    #[serde(default)]
    pub logs: Value,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /isValid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub service: Service,
    pub path: String,
    pub relative: bool,
    pub file_added: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sep: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub success: bool,
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub issues: Vec<Value>,
    #[serde(default)]
    pub logs: Value,
    #[serde(default)]
    pub error: Option<String>,
}
