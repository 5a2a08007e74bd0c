//! Network reachability probing.
//!
//! When a download fails, acquisition blocks on a probe against a fixed
//! address until outbound connectivity returns.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Address probed to decide whether outbound connectivity is back.
pub const DEFAULT_PROBE_URL: &str = "https://8.8.8.8";

/// How long a single probe waits before counting as unreachable.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Pause between probes while connectivity is down.
pub const PROBE_INTERVAL: Duration = Duration::from_secs(5);

/// Best-effort reachability check.
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// Whether the probe target answered at all; any HTTP response counts.
    async fn is_reachable(&self) -> bool;
}

/// Probe that issues a GET against a fixed address.
pub struct HttpProbe {
    client: reqwest::Client,
    url: String,
}

impl HttpProbe {
    /// Create a probe against `url`.
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .expect("failed to create probe HTTP client");

        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ConnectivityProbe for HttpProbe {
    async fn is_reachable(&self) -> bool {
        self.client.get(&self.url).send().await.is_ok()
    }
}

/// Block until the probe reports the network is reachable again.
pub async fn wait_for_connection(probe: &dyn ConnectivityProbe, interval: Duration) {
    loop {
        if probe.is_reachable().await {
            debug!("connectivity restored");
            return;
        }
        tokio::time::sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Probe that is unreachable for the first `down_for` polls.
    struct FlakyProbe {
        down_for: usize,
        polls: AtomicUsize,
    }

    impl FlakyProbe {
        fn new(down_for: usize) -> Self {
            Self {
                down_for,
                polls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ConnectivityProbe for FlakyProbe {
        async fn is_reachable(&self) -> bool {
            self.polls.fetch_add(1, Ordering::SeqCst) >= self.down_for
        }
    }

    #[tokio::test]
    async fn test_wait_returns_immediately_when_reachable() {
        let probe = FlakyProbe::new(0);
        wait_for_connection(&probe, Duration::ZERO).await;
        assert_eq!(probe.polls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_wait_polls_until_reachable() {
        let probe = FlakyProbe::new(3);
        wait_for_connection(&probe, Duration::ZERO).await;
        assert_eq!(probe.polls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_http_probe_builds() {
        let _probe = HttpProbe::new(DEFAULT_PROBE_URL);
    }
}
