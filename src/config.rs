//! Environment configuration.

use std::env;
use std::time::Duration;

use fpv_api::{FpvApiConfig, Service};

pub const BASE_URL_VAR: &str = "FPV_API_BASE_URL";
pub const TIMEOUT_SECS_VAR: &str = "FPV_API_TIMEOUT_SECS";
pub const SERVICE_VAR: &str = "FPV_SERVICE";
pub const DEBUG_VAR: &str = "PATH_BUILDER_DEBUG";

pub const DEFAULT_SERVICE: Service = Service::Windows;

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
    pub service: Option<String>,
    pub debug: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env_string_opt(BASE_URL_VAR),
            timeout: env_string_opt(TIMEOUT_SECS_VAR)
                .and_then(|value| value.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            service: env_string_opt(SERVICE_VAR),
            debug: env_flag(DEBUG_VAR),
        }
    }

    /// Selected service profile, [`DEFAULT_SERVICE`] when unset.
    pub fn service(&self) -> Service {
        self.service
            .as_deref()
            .map(Service::from)
            .unwrap_or(DEFAULT_SERVICE)
    }

    pub fn api_config(&self) -> FpvApiConfig {
        let mut config = FpvApiConfig::default();
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.trim());
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        config
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
