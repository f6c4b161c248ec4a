use std::{
    collections::HashMap,
    net::{IpAddr, Ipv4Addr},
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

use crate::domain::config::server::RateLimitConfig;

/// Clients whose peer address is unknown share this bucket.
pub const UNKNOWN_CLIENT: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    requests: u32,
}

#[derive(Debug)]
struct Windows {
    by_client: HashMap<IpAddr, Window>,
    last_sweep: Instant,
}

/// Fixed-window request counter keyed by client address, held in process memory.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    windows: Arc<Mutex<Windows>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            windows: Arc::new(Mutex::new(Windows {
                by_client: HashMap::new(),
                last_sweep: Instant::now(),
            })),
            max_requests: config.max_requests,
            window: config.window,
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn check(&self, client: IpAddr) -> RateDecision {
        self.check_at(client, Instant::now())
    }

    /// Counts one request from `client` at `now`.
    pub fn check_at(&self, client: IpAddr, now: Instant) -> RateDecision {
        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);

        if now.saturating_duration_since(windows.last_sweep) >= self.window {
            let window = self.window;
            windows
                .by_client
                .retain(|_, w| now.saturating_duration_since(w.started) < window);
            windows.last_sweep = now;
        }

        let entry = windows.by_client.entry(client).or_insert(Window {
            started: now,
            requests: 0,
        });

        if now.saturating_duration_since(entry.started) >= self.window {
            *entry = Window {
                started: now,
                requests: 0,
            };
        }

        if entry.requests < self.max_requests {
            entry.requests += 1;
            RateDecision::Allowed {
                remaining: self.max_requests - entry.requests,
            }
        } else {
            RateDecision::Limited {
                retry_after: self
                    .window
                    .saturating_sub(now.saturating_duration_since(entry.started)),
            }
        }
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .by_client
            .len()
    }
}
