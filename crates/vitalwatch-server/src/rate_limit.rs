//! Fixed-window request counter keyed by client IP.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use jiff::{SignedDuration, Timestamp};

pub const PRUNE_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitRecord {
    pub count: u32,
    pub reset_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { count: u32, reset_at: Timestamp },
    Limited { reset_at: Timestamp },
}

impl RateDecision {
    pub fn is_limited(&self) -> bool {
        matches!(self, RateDecision::Limited { .. })
    }
}

#[derive(Debug)]
pub struct RateLimiter {
    window: SignedDuration,
    max_requests: u32,
    records: HashMap<String, RateLimitRecord>,
}

impl RateLimiter {
    pub fn new(window: SignedDuration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
            records: HashMap::new(),
        }
    }

    /// Count one request from `key` at `now`.
    ///
    /// A key without a live window starts a new one at count 1. Once the
    /// count reaches the maximum, further requests are rejected until
    /// `now` passes `reset_at`.
    pub fn check(&mut self, key: &str, now: Timestamp) -> RateDecision {
        match self.records.get_mut(key) {
            Some(record) if now <= record.reset_at => {
                if record.count >= self.max_requests {
                    return RateDecision::Limited {
                        reset_at: record.reset_at,
                    };
                }
                record.count += 1;
                RateDecision::Allowed {
                    count: record.count,
                    reset_at: record.reset_at,
                }
            }
            _ => {
                let record = RateLimitRecord {
                    count: 1,
                    reset_at: now.saturating_add(self.window).unwrap_or(Timestamp::MAX),
                };
                self.records.insert(key.to_string(), record);
                RateDecision::Allowed {
                    count: record.count,
                    reset_at: record.reset_at,
                }
            }
        }
    }

    /// Drop every record whose window has ended. Returns how many were removed.
    pub fn prune(&mut self, now: Timestamp) -> usize {
        let before = self.records.len();
        self.records.retain(|_, record| now <= record.reset_at);
        before - self.records.len()
    }

    pub fn record(&self, key: &str) -> Option<&RateLimitRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Whole seconds until `reset_at`, rounded up.
pub fn retry_after_secs(reset_at: Timestamp, now: Timestamp) -> u64 {
    let millis = reset_at.duration_since(now).as_millis().max(0);
    u64::try_from(millis).unwrap_or(0).div_ceil(1000)
}

/// Prune `limiter` every [`PRUNE_INTERVAL`] for the life of the runtime.
pub fn spawn_pruner(limiter: Arc<Mutex<RateLimiter>>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            let removed = match limiter.lock() {
                Ok(mut limiter) => limiter.prune(Timestamp::now()),
                Err(poisoned) => poisoned.into_inner().prune(Timestamp::now()),
            };
            if removed > 0 {
                tracing::debug!(removed, "pruned rate limit records");
            }
        }
    })
}
