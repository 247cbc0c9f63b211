use chrono::{DateTime, Duration, SubsecRound, Utc};
use std::cmp::Ordering;
use std::fmt;

use super::Elapsed;
use crate::domain::traits::Clock;

/// A message posted by a user.
///
/// Content and timestamp never change once created. Two posts are equal when
/// both their content and timestamp match; ordering only looks at the timestamp
/// (see [`Post::chronological`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Post {
    content: String,
    timestamp: DateTime<Utc>,
}

impl Post {
    /// Seconds under which a post counts as recent.
    pub const FRESHNESS_WINDOW_SECS: i64 = 1;

    /// Create a post at an explicit instant, truncated to whole seconds.
    pub fn new(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            timestamp: timestamp.trunc_subsecs(0),
        }
    }

    /// Create a post stamped with the clock's current time.
    pub fn create(content: impl Into<String>, clock: &dyn Clock) -> Self {
        Self::new(content, clock.now())
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn elapsed(&self, now: DateTime<Utc>) -> Elapsed {
        Elapsed::between(self.timestamp, now.trunc_subsecs(0))
    }

    pub fn is_recent(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now - self.timestamp < window
    }

    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.is_recent(now, Duration::seconds(Self::FRESHNESS_WINDOW_SECS))
    }

    /// `"<content> (<elapsed>)"`
    pub fn render(&self, now: DateTime<Utc>) -> String {
        format!("{} ({})", self.content, self.elapsed(now))
    }

    /// Copy attributed to `author`, keeping the original timestamp.
    pub fn signed(&self, author: &str) -> Self {
        Self {
            content: format!("{} - {}", author, self.content),
            timestamp: self.timestamp,
        }
    }

    /// Compare by timestamp only, oldest first.
    pub fn chronological(a: &Post, b: &Post) -> Ordering {
        a.timestamp.cmp(&b.timestamp)
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_content_is_kept() {
        let post = Post::new("Hello world", noon());
        assert_eq!(post.content(), "Hello world");
        assert_eq!(post.to_string(), "Hello world");
    }

    #[test]
    fn test_timestamp_truncated_to_seconds() {
        let post = Post::new("x", noon() + Duration::milliseconds(750));
        assert_eq!(post.timestamp(), noon());
    }

    #[test]
    fn test_render_just_now() {
        let post = Post::new("I love the weather today!", noon());
        assert_eq!(post.render(noon() + Duration::milliseconds(400)), "I love the weather today! (just now)");
    }

    #[test]
    fn test_render_elapsed() {
        let post = Post::new("Damn! We lost!", noon());
        assert_eq!(post.render(noon() + Duration::minutes(2)), "Damn! We lost! (2 minutes ago)");
        assert_eq!(post.render(noon() + Duration::minutes(61)), "Damn! We lost! (1 hour ago)");
    }

    #[test]
    fn test_freshness() {
        let post = Post::new("x", noon());
        assert!(post.is_fresh(noon()));
        assert!(!post.is_fresh(noon() + Duration::seconds(1)));
        assert!(post.is_recent(noon() + Duration::seconds(30), Duration::minutes(1)));
    }

    #[test]
    fn test_signed_keeps_timestamp() {
        let post = Post::new("Good game though.", noon());
        let signed = post.signed("Bob");
        assert_eq!(signed.content(), "Bob - Good game though.");
        assert_eq!(signed.timestamp(), post.timestamp());
        assert_ne!(signed, post);
    }

    #[test]
    fn test_equality_and_ordering() {
        let a = Post::new("a", noon());
        let b = Post::new("b", noon());
        let later = Post::new("a", noon() + Duration::seconds(5));

        assert_ne!(a, b);
        assert_eq!(a, Post::new("a", noon()));
        assert_eq!(Post::chronological(&a, &b), Ordering::Equal);
        assert_eq!(Post::chronological(&a, &later), Ordering::Less);
    }
}
