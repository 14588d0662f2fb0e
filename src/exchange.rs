//! The serialize, exchange, decode, check-success sequence shared by every call.

use fpv_api::client::decode;
use fpv_api::payload::{
    AddPartResponse, BuildPathResponse, CleanResponse, RemovePartResponse, ValidateResponse,
};
use fpv_api::{post_json, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PathBuilderError;

/// Response envelope carrying the service's own success flag.
pub(crate) trait Envelope {
    fn success(&self) -> bool;
    fn error_message(&self) -> Option<String>;
}

macro_rules! impl_envelope {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Envelope for $ty {
                fn success(&self) -> bool {
                    self.success
                }

                fn error_message(&self) -> Option<String> {
                    self.error.clone()
                }
            }
        )+
    };
}

impl_envelope!(
    AddPartResponse,
    RemovePartResponse,
    BuildPathResponse,
    CleanResponse,
    ValidateResponse,
);

pub(crate) fn call<Req, Resp>(
    transport: &dyn Transport,
    endpoint: &str,
    request: &Req,
) -> Result<Resp, PathBuilderError>
where
    Req: Serialize,
    Resp: DeserializeOwned + Envelope,
{
    let bytes = post_json(transport, endpoint, request)?;
    let response: Resp = decode(&bytes)?;
    if !response.success() {
        let message = response.error_message();
        tracing::warn!(endpoint, reason = ?message, "FPV request rejected");
        return Err(PathBuilderError::rejected(message));
    }
    Ok(response)
}
