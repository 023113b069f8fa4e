// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the `published_at` and `commented_at` timestamps. The command
/// services take it as a trait object so tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
