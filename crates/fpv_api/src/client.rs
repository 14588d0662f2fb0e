use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::FpvApiConfig;
use crate::error::FpvApiError;
use crate::headers::build_headers;
use crate::url::endpoint_url;

/// Async client for the FPV API. One call is one attempt; nothing is retried.
#[derive(Debug, Clone)]
pub struct FpvApiClient {
    http: Client,
    headers: HeaderMap,
    config: FpvApiConfig,
}

impl FpvApiClient {
    pub fn new(config: FpvApiConfig) -> Result<Self, FpvApiError> {
        let base = endpoint_url(&config.base_url, "");
        Url::parse(&base)
            .map_err(|error| FpvApiError::InvalidBaseUrl(format!("{base}: {error}")))?;

        let headers = header_map(&config)?;
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(FpvApiError::from)?;
        Ok(Self {
            http,
            headers,
            config,
        })
    }

    pub fn config(&self) -> &FpvApiConfig {
        &self.config
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        endpoint_url(&self.config.base_url, endpoint)
    }

    pub fn build_request(&self, endpoint: &str, body: Vec<u8>) -> reqwest::RequestBuilder {
        self.http
            .post(self.url_for(endpoint))
            .headers(self.headers.clone())
            .body(body)
    }

    /// POST already-encoded JSON and return the raw body of a 200 response.
    pub async fn post_bytes(&self, endpoint: &str, body: Vec<u8>) -> Result<Vec<u8>, FpvApiError> {
        tracing::debug!(endpoint, request_bytes = body.len(), "sending FPV request");

        let response = self.build_request(endpoint, body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status != StatusCode::OK {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            tracing::debug!(endpoint, status = status.as_u16(), "FPV request failed");
            return Err(FpvApiError::Status { status, body });
        }

        tracing::debug!(endpoint, response_bytes = bytes.len(), "FPV request completed");
        Ok(bytes.to_vec())
    }

    /// Serialize `payload`, then exchange it. Encoding failures never reach the network.
    pub async fn post_json<T>(&self, endpoint: &str, payload: &T) -> Result<Vec<u8>, FpvApiError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload).map_err(FpvApiError::Serialize)?;
        self.post_bytes(endpoint, body).await
    }
}

/// Decode a response body into its expected shape.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, FpvApiError> {
    serde_json::from_slice(bytes).map_err(FpvApiError::Decode)
}

fn header_map(config: &FpvApiConfig) -> Result<HeaderMap, FpvApiError> {
    let mut out = HeaderMap::new();
    for (key, value) in build_headers(config) {
        out.insert(
            HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| FpvApiError::InvalidHeader(format!("invalid header key: {key}")))?,
            HeaderValue::from_str(&value).map_err(|_| {
                FpvApiError::InvalidHeader(format!("invalid header value for {key}"))
            })?,
        );
    }
    Ok(out)
}
