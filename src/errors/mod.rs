/// Error types for the Meteora API client
///
/// Every failure is surfaced to the immediate caller. Nothing is retried and
/// nothing is classified beyond the origin of the failure.
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request payload could not be serialized; no I/O was attempted
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid request URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Request to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {url}: {source}")]
    BodyRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body did not match the requested shape
    #[error("Failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// True when the failure happened before anything was sent
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ApiError::Encode(_) | ApiError::InvalidUrl { .. } | ApiError::InvalidHeader { .. }
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout { .. })
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> String {
        err.to_string()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_errors() {
        let err = ApiError::InvalidUrl {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert!(err.is_local());
        assert!(!err.is_timeout());
        assert_eq!(
            String::from(err),
            "Invalid request URL not a url: relative URL without a base"
        );
    }

    #[test]
    fn test_timeout_display() {
        let err = ApiError::Timeout {
            url: "https://app.meteora.ag/clmm-api/pair/ABC".to_string(),
            timeout_ms: 5000,
        };
        assert!(err.is_timeout());
        assert!(!err.is_local());
        assert!(err.to_string().contains("5000ms"));
    }

    #[test]
    fn test_decode_error_keeps_status() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = ApiError::Decode {
            status: StatusCode::BAD_GATEWAY,
            source,
        };
        assert!(err.to_string().starts_with("Failed to decode response (HTTP 502 Bad Gateway)"));
    }
}
