// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Time source for submission and review timestamps; swapped for a fixed
/// clock in tests so audit entries are reproducible.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
