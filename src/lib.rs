pub mod apis;
pub mod config;
pub mod errors; // ApiError / ApiResult
pub mod logger;

pub use apis::meteora::{MeteoraClient, MeteoraData, MeteoraQuoteRequest, MeteoraRequest};
pub use errors::{ApiError, ApiResult};
