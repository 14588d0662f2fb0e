use std::collections::BTreeMap;

use crate::config::FpvApiConfig;

pub const HEADER_ACCEPT: &str = "accept";
pub const HEADER_CONTENT_TYPE: &str = "content-type";
pub const HEADER_USER_AGENT: &str = "user-agent";

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Build a deterministic header map for FPV API requests.
///
/// Extra headers are applied last and may override the defaults.
pub fn build_headers(config: &FpvApiConfig) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();

    headers.insert(HEADER_CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned());
    headers.insert(HEADER_ACCEPT.to_owned(), JSON_CONTENT_TYPE.to_owned());

    let ua = config
        .user_agent
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(default_user_agent);
    headers.insert(HEADER_USER_AGENT.to_owned(), ua);

    for (key, value) in &config.extra_headers {
        let key = key.trim().to_ascii_lowercase();
        if key.is_empty() {
            continue;
        }
        headers.insert(key, value.trim().to_owned());
    }

    headers
}

fn default_user_agent() -> String {
    format!("path_builder/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_declare_json_both_ways() {
        let headers = build_headers(&FpvApiConfig::default());

        assert_eq!(headers[HEADER_CONTENT_TYPE], "application/json");
        assert_eq!(headers[HEADER_ACCEPT], "application/json");
        assert!(headers[HEADER_USER_AGENT].starts_with("path_builder/"));
    }

    #[test]
    fn blank_user_agent_override_falls_back_to_default() {
        let headers = build_headers(&FpvApiConfig::default().with_user_agent("   "));
        assert!(headers[HEADER_USER_AGENT].starts_with("path_builder/"));
    }

    #[test]
    fn extra_headers_are_lowercased_and_trimmed() {
        let config = FpvApiConfig::default()
            .insert_header(" X-Trace-Id ", " abc ")
            .insert_header("   ", "dropped");
        let headers = build_headers(&config);

        assert_eq!(headers.get("x-trace-id").map(String::as_str), Some("abc"));
        assert_eq!(headers.len(), 4);
    }
}
