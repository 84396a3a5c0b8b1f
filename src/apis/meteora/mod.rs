/// Meteora pool/quote API client
///
/// Operations:
/// 1. `get` - GET with the request data appended to the path
/// 2. `post` - POST with the request struct as a JSON body
/// 3. `swap_quote` - GET /clmm-api/pair/{pair_id} with browser headers
///
/// Every call borrows a client from an internal pool for its whole duration
/// and returns it when done, whatever the outcome. Responses are decoded into
/// the caller's type; on failure the caller's value is left untouched.
pub mod request;
pub mod types;


pub use self::request::{CACHE_CONTENT_HEADER, FORM_CONTENT_TYPE, NO_CACHE, SWAP_QUOTE_PATH};
pub use self::types::{MeteoraData, MeteoraQuoteRequest, MeteoraRequest};

use crate::apis::client::HttpClientPool;
use crate::apis::stats::{ApiStats, ApiStatsTracker};
use crate::config::MeteoraConfig;
use crate::errors::{ApiError, ApiResult};
use crate::logger::{self, LogTag};
use reqwest::header::{HeaderMap, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub struct MeteoraClient {
    base_url: String,
    user_agent: String,
    pool: HttpClientPool,
    stats: ApiStatsTracker,
}

impl MeteoraClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(&MeteoraConfig::with_base_url(base_url))
    }

    pub fn with_config(config: &MeteoraConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
            pool: HttpClientPool::new(Duration::from_millis(config.timeout_ms)),
            stats: ApiStatsTracker::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pool(&self) -> &HttpClientPool {
        &self.pool
    }

    pub async fn get_stats(&self) -> ApiStats {
        self.stats.get_stats().await
    }

    /// GET `base + path + data[?query]`, decoding the response into `result`
    ///
    /// The serialized request is sent as the body even though this is a GET;
    /// the upstream tolerates it and existing integrations rely on it.
    pub async fn get<T>(&self, result: &mut T, path: &str, request: &MeteoraRequest) -> ApiResult<()>
    where
        T: DeserializeOwned,
    {
        *result = self.get_json(path, request).await?;
        Ok(())
    }

    /// POST `base + path[?query]`, decoding the response into `result`
    pub async fn post<T>(&self, result: &mut T, path: &str, request: &MeteoraRequest) -> ApiResult<()>
    where
        T: DeserializeOwned,
    {
        *result = self.post_json(path, request).await?;
        Ok(())
    }

    /// Pair lookup: GET /clmm-api/pair/{pair_id}
    ///
    /// The browser User-Agent and `Cache-Content: no-cache` always win over
    /// caller headers with the same name.
    pub async fn swap_quote<T>(
        &self,
        result: &mut T,
        mut headers: HashMap<String, String>,
        quote: &MeteoraQuoteRequest,
    ) -> ApiResult<()>
    where
        T: DeserializeOwned,
    {
        headers.retain(|name, _| {
            !name.eq_ignore_ascii_case(USER_AGENT.as_str())
                && !name.eq_ignore_ascii_case(CACHE_CONTENT_HEADER)
        });
        headers.insert("User-Agent".to_string(), self.user_agent.clone());
        headers.insert(CACHE_CONTENT_HEADER.to_string(), NO_CACHE.to_string());

        let request = MeteoraRequest {
            data: Some(quote.pair_id.clone()),
            query_params: None,
            headers,
        };

        self.get(result, SWAP_QUOTE_PATH, &request).await
    }

    /// Fetch a single pool record by pair id
    pub async fn fetch_pair(&self, pair_id: &str) -> ApiResult<MeteoraData> {
        let mut pool = MeteoraData::default();
        self.swap_quote(&mut pool, HashMap::new(), &MeteoraQuoteRequest::new(pair_id))
            .await?;
        Ok(pool)
    }

    /// Same as [`MeteoraClient::get`], returning the decoded value
    pub async fn get_json<T>(&self, path: &str, request: &MeteoraRequest) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = request::build_get_url(&self.base_url, path, request);
        let body = request::encode_body(request)?;
        let headers = request::build_headers(&[], &request.headers)?;

        self.dispatch(Method::GET, path, url, Some(body), headers)
            .await
    }

    /// Same as [`MeteoraClient::post`], returning the decoded value
    ///
    /// Declares a form content type while sending JSON; callers can override
    /// `content-type` through the request headers.
    pub async fn post_json<T>(&self, path: &str, request: &MeteoraRequest) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = request::build_post_url(&self.base_url, path, request);
        let body = match request.data {
            Some(_) => Some(request::encode_body(request)?),
            None => None,
        };
        let headers = request::build_headers(
            &[
                (CONTENT_TYPE.as_str(), FORM_CONTENT_TYPE),
                (CACHE_CONTENT_HEADER, NO_CACHE),
            ],
            &request.headers,
        )?;

        self.dispatch(Method::POST, path, url, body, headers).await
    }

    async fn dispatch<T>(
        &self,
        method: Method,
        endpoint: &str,
        url: String,
        body: Option<String>,
        headers: HeaderMap,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let parsed = request::parse_url(&url)?;

        // Released back to the pool when this guard drops, on every path
        let client = self.pool.acquire();

        let mut builder = client.request(method.clone(), parsed).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        logger::debug(LogTag::Api, &format!("{} {}", method, url));

        let start = Instant::now();
        let response_result = builder.send().await;

        let response = match response_result {
            Ok(response) => response,
            Err(err) => {
                let elapsed = start.elapsed().as_millis() as f64;
                let error = self.transport_error(url, err, false);
                self.record_failure(&method, endpoint, elapsed, &error).await;
                return Err(error);
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                let elapsed = start.elapsed().as_millis() as f64;
                let error = self.transport_error(url, err, true);
                self.record_failure(&method, endpoint, elapsed, &error).await;
                return Err(error);
            }
        };
        let elapsed = start.elapsed().as_millis() as f64;

        if !status.is_success() {
            logger::debug(
                LogTag::Api,
                &format!("{} {} answered HTTP {}", method, url, status),
            );
        }

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => {
                self.stats.record_request(true, elapsed).await;
                logger::verbose(
                    LogTag::Api,
                    &format!(
                        "{} {} -> HTTP {} ({} bytes, {:.0}ms)",
                        method,
                        url,
                        status,
                        bytes.len(),
                        elapsed
                    ),
                );
                Ok(value)
            }
            Err(err) => {
                let error = ApiError::Decode {
                    status,
                    source: err,
                };
                self.record_failure(&method, endpoint, elapsed, &error).await;
                Err(error)
            }
        }
    }

    fn transport_error(&self, url: String, err: reqwest::Error, reading_body: bool) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                url,
                timeout_ms: self.pool.timeout().as_millis() as u64,
            }
        } else if reading_body {
            ApiError::BodyRead { url, source: err }
        } else {
            ApiError::Network { url, source: err }
        }
    }

    async fn record_failure(&self, method: &Method, endpoint: &str, elapsed: f64, error: &ApiError) {
        self.stats.record_request(false, elapsed).await;
        self.stats
            .record_error(format!("{} {}: {}", method, endpoint, error))
            .await;
        logger::warning(
            LogTag::Api,
            &format!("Meteora {} {} failed: {}", method, endpoint, error),
        );
    }
}
