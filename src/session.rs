//! Client-held state for building one path incrementally.
//!
//! The session never interprets paths. Every successful exchange replaces
//! `base_path`, `path_parts` and `errors` wholesale with what the service
//! returned; a failed exchange leaves all three untouched.

use std::fmt;
use std::sync::Arc;

use fpv_api::payload::{AddPartRequest, AddPartResponse, RemovePartRequest, RemovePartResponse};
use fpv_api::url::{ADD_PART_ENDPOINT, REMOVE_PART_ENDPOINT};
use fpv_api::{Service, Transport};
use serde_json::Value;

use crate::error::PathBuilderError;
use crate::exchange::call;

/// Incrementally built path whose authoritative form lives server-side.
///
/// Operations take `&mut self`: one call completes before the next begins.
/// Share a session across threads only behind external locking.
pub struct PathSession {
    transport: Arc<dyn Transport>,
    service: Service,
    base_path: String,
    path_parts: Vec<String>,
    errors: Vec<Value>,
    relative: bool,
    file_added: bool,
    sep: Option<String>,
}

impl PathSession {
    pub fn new(
        transport: Arc<dyn Transport>,
        service: Service,
        base_path: impl Into<String>,
        relative: bool,
        file_added: bool,
    ) -> Self {
        Self {
            transport,
            service,
            base_path: base_path.into(),
            path_parts: Vec::new(),
            errors: Vec::new(),
            relative,
            file_added,
            sep: None,
        }
    }

    /// Ask the service to join components with `sep` instead of the profile default.
    #[must_use]
    pub fn with_separator(mut self, sep: impl Into<String>) -> Self {
        self.sep = Some(sep.into());
        self
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }

    pub fn file_added(&self) -> bool {
        self.file_added
    }

    /// Mark whether the next added component is a filename. Takes effect on
    /// the next operation; no exchange happens here.
    pub fn set_file_added(&mut self, file_added: bool) {
        self.file_added = file_added;
    }

    pub fn separator(&self) -> Option<&str> {
        self.sep.as_deref()
    }

    pub fn current_path(&self) -> &str {
        &self.base_path
    }

    pub fn current_parts(&self) -> &[String] {
        &self.path_parts
    }

    pub fn current_errors(&self) -> &[Value] {
        &self.errors
    }

    /// Append one component.
    ///
    /// Returns only the errors this component introduced. The full list is
    /// available from [`PathSession::current_errors`] afterwards.
    pub fn add_part(&mut self, part: impl Into<String>) -> Result<Vec<Value>, PathBuilderError> {
        self.send_add(vec![part.into()])
    }

    /// Append several components in one exchange.
    ///
    /// With file-added mode on, the service treats only the last of them as
    /// the filename. An empty slice is refused without contacting the service.
    pub fn add_parts<S: AsRef<str>>(
        &mut self,
        parts: &[S],
    ) -> Result<Vec<Value>, PathBuilderError> {
        if parts.is_empty() {
            return Err(PathBuilderError::NoParts);
        }
        self.send_add(parts.iter().map(|part| part.as_ref().to_owned()).collect())
    }

    /// Remove the component at `index` of [`PathSession::current_parts`].
    ///
    /// The index is not bounds-checked locally. Returns the full error list
    /// after the removal, which also becomes the session's error list.
    pub fn remove_part(&mut self, index: usize) -> Result<Vec<Value>, PathBuilderError> {
        let request = self.remove_request(index);
        let response: RemovePartResponse =
            call(self.transport.as_ref(), REMOVE_PART_ENDPOINT, &request)?;

        tracing::debug!(
            index,
            removed = ?response.removed_part,
            updated_path = %response.updated_path,
            remaining_errors = response.remaining_errors.len(),
            "path part removed"
        );

        self.base_path = response.updated_path;
        self.path_parts = response.path_parts;
        self.errors = response.remaining_errors.clone();
        Ok(response.remaining_errors)
    }

    fn send_add(&mut self, parts: Vec<String>) -> Result<Vec<Value>, PathBuilderError> {
        let request = self.add_request(parts);
        let response: AddPartResponse = call(self.transport.as_ref(), ADD_PART_ENDPOINT, &request)?;

        tracing::debug!(
            updated_path = %response.updated_path,
            new_errors = response.new_errors.len(),
            all_errors = response.all_errors.len(),
            "path part added"
        );

        self.base_path = response.updated_path;
        self.path_parts = response.path_parts;
        self.errors = response.all_errors;
        Ok(response.new_errors)
    }

    fn add_request(&self, parts: Vec<String>) -> AddPartRequest {
        AddPartRequest {
            service: self.service.clone(),
            base_path: self.base_path.clone(),
            parts,
            errors: self.errors.clone(),
            validate: true,
            relative: self.relative,
            file_added: self.file_added,
            sep: self.sep.clone(),
        }
    }

    fn remove_request(&self, part_index: usize) -> RemovePartRequest {
        RemovePartRequest {
            service: self.service.clone(),
            base_path: self.base_path.clone(),
            part_index,
            errors: self.errors.clone(),
            relative: self.relative,
            file_added: self.file_added,
            sep: self.sep.clone(),
        }
    }
}

impl fmt::Debug for PathSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathSession")
            .field("service", &self.service)
            .field("base_path", &self.base_path)
            .field("path_parts", &self.path_parts)
            .field("errors", &self.errors)
            .field("relative", &self.relative)
            .field("file_added", &self.file_added)
            .field("sep", &self.sep)
            .finish_non_exhaustive()
    }
}
