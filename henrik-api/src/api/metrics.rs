use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::{Instrument, info_span};

/// Counters of the HenrikDev API requests performed by a client.
#[derive(Debug)]
pub struct RequestMetrics {
    start: Instant,
    total: AtomicU64,
    succeeded: AtomicU64,
    failed: AtomicU64,
}

/// Point-in-time copy of [`RequestMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub total: u64,
    pub succeeded: u64,
    pub failed: u64,
}

impl RequestMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            total: AtomicU64::new(0),
            succeeded: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        })
    }

    pub fn inc(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record(&self, success: bool) {
        let counter = if success {
            &self.succeeded
        } else {
            &self.failed
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total: self.total.load(Ordering::Relaxed),
            succeeded: self.succeeded.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }

    /// Average amount of requests per minute since creation.
    pub fn per_minute(&self) -> f64 {
        let elapsed_min = self.start.elapsed().as_secs_f64() / 60.0;
        if elapsed_min > 0.0 {
            self.total.load(Ordering::Relaxed) as f64 / elapsed_min
        } else {
            0.0
        }
    }

    /// One line report of the counters, as logged by [`Self::log_loop`].
    pub fn summary(&self) -> String {
        let snapshot = self.snapshot();
        format!(
            "{} requests executed, {} succeeded, {} failed (avg {:.2} req/min)",
            snapshot.total,
            snapshot.succeeded,
            snapshot.failed,
            self.per_minute()
        )
    }

    pub async fn log_loop(self: Arc<Self>, every: Duration) {
        let mut interval = tokio::time::interval(every);
        // first tick completes immediately
        interval.tick().await;
        loop {
            let span = info_span!("📊 ", client = "henrikdev");
            async {
                interval.tick().await;
                tracing::info!("{}", self.summary());
            }
            .instrument(span)
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn counters_track_outcomes() {
        let metrics = RequestMetrics::new();
        metrics.inc();
        metrics.inc();
        metrics.record(true);
        metrics.record(false);

        let metrics = Arc::try_unwrap(metrics).expect("arc should be unique");
        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                total: 2,
                succeeded: 1,
                failed: 1
            }
        );
    }

    #[test]
    fn summary_reports_counters() {
        let metrics = RequestMetrics::new();
        metrics.inc();
        metrics.inc();
        metrics.inc();
        metrics.record(true);
        metrics.record(true);
        metrics.record(false);

        let summary = metrics.summary();
        assert!(
            summary.starts_with("3 requests executed, 2 succeeded, 1 failed (avg "),
            "{summary}"
        );
        assert!(summary.ends_with(" req/min)"), "{summary}");
    }

    #[tokio::test]
    async fn log_loop_keeps_running_past_a_tick() {
        tokio::time::pause();

        let metrics = RequestMetrics::new();
        let cloned = metrics.clone();
        let handle =
            tokio::spawn(async move { cloned.log_loop(Duration::from_secs(60)).await });

        tokio::time::advance(Duration::from_secs(61)).await;
        tokio::task::yield_now().await;

        assert!(!handle.is_finished());
        assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
        assert_eq!(Arc::strong_count(&metrics), 2);

        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());
        assert_eq!(Arc::strong_count(&metrics), 1);
    }
}
