/// Pool of reusable HTTP clients with a fixed request timeout
use parking_lot::Mutex;
use reqwest::Client;
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::config::REQUEST_TIMEOUT_MS;
use crate::logger::{self, LogTag};

/// Unbounded pool of `reqwest::Client` instances
///
/// Clients are built lazily the first time no idle one is available and are
/// reused indefinitely afterwards. There is no eviction and no health check.
pub struct HttpClientPool {
    idle: Mutex<Vec<Client>>,
    timeout: Duration,
    created: AtomicUsize,
}

impl HttpClientPool {
    pub fn new(timeout: Duration) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            timeout,
            created: AtomicUsize::new(0),
        }
    }

    /// Borrow a client; it goes back to the pool when the guard is dropped
    pub fn acquire(&self) -> PooledClient<'_> {
        let reused = self.idle.lock().pop();
        let client = match reused {
            Some(client) => client,
            None => self.build_client(),
        };

        PooledClient { client, pool: self }
    }

    pub fn release(&self, client: Client) {
        self.idle.lock().push(client);
    }

    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    /// Number of clients constructed over the pool's lifetime
    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn build_client(&self) -> Client {
        let total = self.created.fetch_add(1, Ordering::Relaxed) + 1;
        logger::debug(
            LogTag::Pool,
            &format!(
                "Creating HTTP client #{} (timeout={}ms)",
                total,
                self.timeout.as_millis()
            ),
        );

        Client::builder()
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|e| {
                logger::warning(
                    LogTag::Pool,
                    &format!("Failed to build HTTP client: {} - using library defaults", e),
                );
                Client::new()
            })
    }
}

impl Default for HttpClientPool {
    fn default() -> Self {
        Self::new(Duration::from_millis(REQUEST_TIMEOUT_MS))
    }
}

/// RAII guard returned by [`HttpClientPool::acquire`]
///
/// Releases the client on every exit path, including early `?` returns and
/// unwinding.
pub struct PooledClient<'a> {
    client: Client,
    pool: &'a HttpClientPool,
}

impl Deref for PooledClient<'_> {
    type Target = Client;

    fn deref(&self) -> &Client {
        &self.client
    }
}

impl Drop for PooledClient<'_> {
    fn drop(&mut self) {
        // reqwest clients are handles over shared state, the clone is cheap
        self.pool.release(self.client.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let pool = HttpClientPool::default();
        assert_eq!(pool.timeout(), Duration::from_millis(5000));
        assert_eq!(pool.idle_count(), 0);
        assert_eq!(pool.created_count(), 0);
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let pool = HttpClientPool::default();
        {
            let _client = pool.acquire();
            assert_eq!(pool.idle_count(), 0);
        }
        assert_eq!(pool.idle_count(), 1);

        // Reuses the idle client instead of building another
        let _client = pool.acquire();
        assert_eq!(pool.created_count(), 1);
        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn test_grows_under_concurrent_borrows() {
        let pool = HttpClientPool::default();
        let first = pool.acquire();
        let second = pool.acquire();
        assert_eq!(pool.created_count(), 2);

        drop(first);
        drop(second);
        assert_eq!(pool.idle_count(), 2);
    }

    #[test]
    fn test_release_on_early_return() {
        fn fails_midway(pool: &HttpClientPool) -> Result<(), String> {
            let _client = pool.acquire();
            "not-a-number".parse::<u32>().map_err(|e| e.to_string())?;
            Ok(())
        }

        let pool = HttpClientPool::default();
        assert!(fails_midway(&pool).is_err());
        assert_eq!(pool.idle_count(), 1);
    }

    #[test]
    fn test_shared_across_threads() {
        let pool = std::sync::Arc::new(HttpClientPool::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let pool = pool.clone();
                std::thread::spawn(move || {
                    let _client = pool.acquire();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(pool.idle_count(), pool.created_count());
        assert!(pool.created_count() >= 1);
    }
}
