//! Transport-only client primitives for the file path validation (FPV) API.
//!
//! This crate owns request building, response decoding and the failure
//! taxonomy for the path endpoints. It holds no path semantics: what makes a
//! component legal for a given service is decided server-side and surfaced
//! here as opaque JSON records.
//!
//! Callers that need the synchronous call shape go through [`Transport`],
//! implemented for real HTTP by [`BlockingTransport`].

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod payload;
pub mod transport;
pub mod url;

pub use client::FpvApiClient;
pub use config::FpvApiConfig;
pub use error::FpvApiError;
pub use payload::{
    AddPartRequest, AddPartResponse, BuildPathRequest, BuildPathResponse, BuildStepErrors,
    CleanRequest, CleanResponse, RemovePartRequest, RemovePartResponse, Service,
    ValidateRequest, ValidateResponse,
};
pub use reqwest::StatusCode;
pub use transport::{post_json, BlockingTransport, Transport};
pub use url::endpoint_url;
