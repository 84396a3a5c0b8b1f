/// HTTP API clients
pub mod client;
pub mod meteora;
pub mod stats;

pub use client::{HttpClientPool, PooledClient};
pub use stats::{ApiStats, ApiStatsTracker};
