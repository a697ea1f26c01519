use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

/// Sliding-window limiter for chat messages, keyed by user id.
///
/// Each user may send `limit` messages within any `window`-long interval.
pub struct RateLimiter {
    /// Accepted message times per user, oldest first. Users with nothing
    /// left in the window are dropped.
    sent: HashMap<String, VecDeque<Instant>>,
    limit: usize,
    window: Duration,
    last_sweep: Option<Instant>,
}

impl RateLimiter {
    pub fn new(limit: usize, window: Duration) -> Self {
        RateLimiter {
            sent: HashMap::new(),
            limit,
            window,
            last_sweep: None,
        }
    }

    /// Records a message for `user_id` if it fits in the window.
    ///
    /// Returns `false` (and records nothing) when the user is over the limit.
    pub fn check(&mut self, user_id: &str) -> bool {
        self.check_at(user_id, Instant::now())
    }

    /// Number of users with messages still inside the window.
    pub fn tracked_users(&self) -> usize {
        self.sent.len()
    }

    fn check_at(&mut self, user_id: &str, now: Instant) -> bool {
        let sweep_due = self
            .last_sweep
            .map_or(true, |last| now.duration_since(last) >= self.window);
        if sweep_due {
            self.sweep(now);
        }

        let window = self.window;
        let times = self.sent.entry(user_id.to_string()).or_default();
        expire(times, now, window);

        if times.len() < self.limit {
            times.push_back(now);
            true
        } else {
            if times.is_empty() {
                self.sent.remove(user_id);
            }
            false
        }
    }

    /// Drops expired times for every user, and users left with none.
    fn sweep(&mut self, now: Instant) {
        let window = self.window;
        self.sent.retain(|_, times| {
            expire(times, now, window);
            !times.is_empty()
        });
        self.last_sweep = Some(now);
    }
}

fn expire(times: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&oldest) = times.front() {
        if now.duration_since(oldest) >= window {
            times.pop_front();
        } else {
            break;
        }
    }
}
