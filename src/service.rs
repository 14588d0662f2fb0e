//! One-shot path operations that keep no client-side state.

use std::fmt;
use std::sync::Arc;

use fpv_api::payload::{
    BuildPathRequest, BuildPathResponse, CleanRequest, CleanResponse, ValidateRequest,
    ValidateResponse,
};
use fpv_api::url::{BUILD_PATH_ENDPOINT, CLEAN_ENDPOINT, VALIDATE_ENDPOINT};
use fpv_api::{Service, Transport};

use crate::error::PathBuilderError;
use crate::exchange::call;

/// Stateless facade over the build, clean and validate endpoints.
#[derive(Clone)]
pub struct PathService {
    transport: Arc<dyn Transport>,
    service: Service,
    relative: bool,
    file_added: bool,
    sep: Option<String>,
}

impl PathService {
    pub fn new(transport: Arc<dyn Transport>, service: Service) -> Self {
        Self {
            transport,
            service,
            relative: false,
            file_added: false,
            sep: None,
        }
    }

    #[must_use]
    pub fn relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    #[must_use]
    pub fn file_added(mut self, file_added: bool) -> Self {
        self.file_added = file_added;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, sep: impl Into<String>) -> Self {
        self.sep = Some(sep.into());
        self
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Assemble `root` and `parts` in one exchange, with issues reported per step.
    pub fn build<S: AsRef<str>>(
        &self,
        root: &str,
        parts: &[S],
    ) -> Result<BuildPathResponse, PathBuilderError> {
        let request = BuildPathRequest {
            service: self.service.clone(),
            root_path: root.to_owned(),
            path_parts: parts.iter().map(|part| part.as_ref().to_owned()).collect(),
            relative: self.relative,
            file_added: self.file_added,
            sep: self.sep.clone(),
        };
        call(self.transport.as_ref(), BUILD_PATH_ENDPOINT, &request)
    }

    pub fn clean(&self, path: &str) -> Result<CleanResponse, PathBuilderError> {
        let request = CleanRequest {
            service: self.service.clone(),
            path: path.to_owned(),
            relative: self.relative,
            file_added: self.file_added,
            sep: self.sep.clone(),
        };
        call(self.transport.as_ref(), CLEAN_ENDPOINT, &request)
    }

    pub fn validate(&self, path: &str) -> Result<ValidateResponse, PathBuilderError> {
        let request = ValidateRequest {
            service: self.service.clone(),
            path: path.to_owned(),
            relative: self.relative,
            file_added: self.file_added,
            sep: self.sep.clone(),
        };
        call(self.transport.as_ref(), VALIDATE_ENDPOINT, &request)
    }
}

impl fmt::Debug for PathService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathService")
            .field("service", &self.service)
            .field("relative", &self.relative)
            .field("file_added", &self.file_added)
            .field("sep", &self.sep)
            .finish_non_exhaustive()
    }
}
