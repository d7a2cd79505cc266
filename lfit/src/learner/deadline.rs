//! Deadline tracking for learning
//!
//! A [`Deadline`] is created once per learning run and shared read-only by
//! every per-target task. Learners poll [`Deadline::expired`] between search
//! steps and stop early when it returns true.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start_time: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    /// A deadline that never expires
    pub fn none() -> Self {
        Self {
            start_time: Instant::now(),
            limit: None,
        }
    }

    /// A deadline expiring `ms` milliseconds from now, or never for `None`
    pub fn after_ms(ms: Option<u64>) -> Self {
        Self {
            start_time: Instant::now(),
            limit: ms.map(Duration::from_millis),
        }
    }

    pub fn expired(&self) -> bool {
        match self.limit {
            Some(limit) => self.start_time.elapsed() >= limit,
            None => false,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::none()
    }
}
