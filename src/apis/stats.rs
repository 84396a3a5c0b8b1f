/// Per-client request statistics
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;

/// Snapshot returned by [`ApiStatsTracker::get_stats`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiStats {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub average_response_time_ms: f64,
    pub last_error: Option<String>,
    pub last_request_at: Option<DateTime<Utc>>,
}

impl ApiStats {
    pub fn success_rate(&self) -> f64 {
        if self.total_requests == 0 {
            return 0.0;
        }
        self.successful_requests as f64 / self.total_requests as f64 * 100.0
    }
}

#[derive(Default)]
struct StatsInner {
    stats: ApiStats,
    total_response_time_ms: f64,
}

#[derive(Default)]
pub struct ApiStatsTracker {
    inner: Mutex<StatsInner>,
}

impl ApiStatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_request(&self, success: bool, elapsed_ms: f64) {
        let mut inner = self.inner.lock().await;
        inner.total_response_time_ms += elapsed_ms;

        let stats = &mut inner.stats;
        stats.total_requests += 1;
        if success {
            stats.successful_requests += 1;
        } else {
            stats.failed_requests += 1;
        }
        stats.last_request_at = Some(Utc::now());

        let total = inner.stats.total_requests as f64;
        inner.stats.average_response_time_ms = inner.total_response_time_ms / total;
    }

    pub async fn record_error(&self, message: String) {
        self.inner.lock().await.stats.last_error = Some(message);
    }

    pub async fn get_stats(&self) -> ApiStats {
        self.inner.lock().await.stats.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_requests() {
        let tracker = ApiStatsTracker::new();
        tracker.record_request(true, 100.0).await;
        tracker.record_request(false, 300.0).await;
        tracker.record_error("GET /clmm-api/pair/x: timeout".to_string()).await;

        let stats = tracker.get_stats().await;
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.successful_requests, 1);
        assert_eq!(stats.failed_requests, 1);
        assert_eq!(stats.average_response_time_ms, 200.0);
        assert_eq!(stats.success_rate(), 50.0);
        assert_eq!(
            stats.last_error.as_deref(),
            Some("GET /clmm-api/pair/x: timeout")
        );
        assert!(stats.last_request_at.is_some());
    }

    #[tokio::test]
    async fn test_empty_stats() {
        let stats = ApiStatsTracker::new().get_stats().await;
        assert_eq!(stats, ApiStats::default());
        assert_eq!(stats.success_rate(), 0.0);
    }
}
