/// Default base address of a locally running FPV API.
pub const DEFAULT_FPV_BASE_URL: &str = "http://localhost:8000/api/v1";

pub const ADD_PART_ENDPOINT: &str = "/path/add";
pub const REMOVE_PART_ENDPOINT: &str = "/path/remove";
pub const BUILD_PATH_ENDPOINT: &str = "/path/build";
pub const CLEAN_ENDPOINT: &str = "/clean";
pub const VALIDATE_ENDPOINT: &str = "/isValid";

/// Join a base address and an endpoint path into a request URL.
///
/// Exactly one `/` separates the two halves regardless of how either side is
/// written. A blank base falls back to [`DEFAULT_FPV_BASE_URL`].
pub fn endpoint_url(base: &str, endpoint: &str) -> String {
    let base = if base.trim().is_empty() {
        DEFAULT_FPV_BASE_URL
    } else {
        base.trim()
    };

    let base = base.trim_end_matches('/');
    let endpoint = endpoint.trim().trim_start_matches('/');
    if endpoint.is_empty() {
        return base.to_string();
    }
    format!("{base}/{endpoint}")
}
