//! Incremental path building against the FPV path validation service.
//!
//! A [`PathSession`] keeps a path's client-side copy (base path, components,
//! accumulated validation errors) and folds every service response back into
//! it. All path semantics stay on the server; see the `fpv_api` crate for the
//! wire contract.

pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod session;

mod exchange;

pub use config::EnvConfig;
pub use error::PathBuilderError;
pub use logging::init_logging;
pub use service::PathService;
pub use session::PathSession;

pub use fpv_api::{BlockingTransport, FpvApiConfig, FpvApiError, Service, Transport};
