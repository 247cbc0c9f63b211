use chrono::{DateTime, Utc};

/// Clock trait - source of the current time
///
/// Injected wherever a post is stamped or rendered so tests can freeze and
/// advance time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
