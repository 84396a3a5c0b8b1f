/// URL, header and body assembly for Meteora requests
///
/// Nothing here escapes anything: path segments and query strings are
/// concatenated exactly as given, callers pre-escape when they need to.
/// The string is still parsed by `reqwest::Url` before sending, which
/// resolves dot segments: a payload of `../admin` under `/clmm-api/pair/`
/// is requested as `/clmm-api/admin`.
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;
use std::collections::HashMap;

use super::types::MeteoraRequest;
use crate::errors::{ApiError, ApiResult};

pub const SWAP_QUOTE_PATH: &str = "/clmm-api/pair/";
pub const CACHE_CONTENT_HEADER: &str = "Cache-Content";
pub const NO_CACHE: &str = "no-cache";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// `base + path + data`, then `?query` when present
pub fn build_get_url(base_url: &str, path: &str, request: &MeteoraRequest) -> String {
    let data = request.data.as_deref().unwrap_or_default();
    append_query(
        format!("{}{}{}", base_url, path, data),
        request.query_params.as_deref(),
    )
}

/// `base + path`, then `?query` when present
pub fn build_post_url(base_url: &str, path: &str, request: &MeteoraRequest) -> String {
    append_query(
        format!("{}{}", base_url, path),
        request.query_params.as_deref(),
    )
}

fn append_query(url: String, query: Option<&str>) -> String {
    match query {
        Some(query) => format!("{}?{}", url, query),
        None => url,
    }
}

pub fn parse_url(raw: &str) -> ApiResult<Url> {
    Url::parse(raw).map_err(|e| ApiError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Defaults first, then caller headers; same name (case-insensitive) replaces
pub fn build_headers(
    defaults: &[(&str, &str)],
    overrides: &HashMap<String, String>,
) -> ApiResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    let pairs = defaults
        .iter()
        .map(|(name, value)| (*name, *value))
        .chain(overrides.iter().map(|(name, value)| (name.as_str(), value.as_str())));

    for (name, value) in pairs {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ApiError::InvalidHeader {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| ApiError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

/// The whole request struct is the body
pub fn encode_body(request: &MeteoraRequest) -> ApiResult<String> {
    serde_json::to_string(request).map_err(ApiError::Encode)
}
