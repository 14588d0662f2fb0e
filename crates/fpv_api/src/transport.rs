//! Synchronous exchange seam used by path sessions.

use serde::Serialize;
use tokio::runtime::{Builder, Runtime};

use crate::client::FpvApiClient;
use crate::config::FpvApiConfig;
use crate::error::FpvApiError;

/// One blocking request/response exchange against a named endpoint.
///
/// Implementations hold no per-caller state, so one transport may serve any
/// number of sessions.
pub trait Transport: Send + Sync {
    /// Send an encoded JSON body to `endpoint` and return the raw body of a
    /// successful response. Decoding is left to the caller.
    fn exchange(&self, endpoint: &str, body: Vec<u8>) -> Result<Vec<u8>, FpvApiError>;
}

/// Serialize `payload` and exchange it through `transport`.
pub fn post_json<T>(
    transport: &dyn Transport,
    endpoint: &str,
    payload: &T,
) -> Result<Vec<u8>, FpvApiError>
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_vec(payload).map_err(FpvApiError::Serialize)?;
    transport.exchange(endpoint, body)
}

/// [`Transport`] over real HTTP.
///
/// Drives [`FpvApiClient`] on a private current-thread runtime, so calls block
/// the caller until the exchange completes or the configured timeout expires.
/// Must not be called from inside another tokio runtime.
#[derive(Debug)]
pub struct BlockingTransport {
    client: FpvApiClient,
    runtime: Runtime,
}

impl BlockingTransport {
    pub fn new(config: FpvApiConfig) -> Result<Self, FpvApiError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| {
                FpvApiError::Runtime(format!("failed to initialize tokio runtime: {error}"))
            })?;
        let client = FpvApiClient::new(config)?;
        Ok(Self { client, runtime })
    }

    pub fn client(&self) -> &FpvApiClient {
        &self.client
    }
}

impl Transport for BlockingTransport {
    fn exchange(&self, endpoint: &str, body: Vec<u8>) -> Result<Vec<u8>, FpvApiError> {
        let exchange = self.client.post_bytes(endpoint, body);
        self.runtime.block_on(exchange)
    }
}
