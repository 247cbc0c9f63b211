use chrono::{DateTime, Utc};
use std::fmt;

use super::Post;
use crate::domain::traits::Clock;

/// A member of the social network
///
/// Followed users are kept by name and resolved through the registry that
/// owns them, so a user never holds another user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    posts: Vec<Post>,
    following: Vec<String>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            posts: Vec::new(),
            following: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_post(&mut self, content: impl Into<String>, clock: &dyn Clock) {
        self.posts.push(Post::create(content, clock));
    }

    /// Unsigned posts come back most recent first. Signed copies keep the
    /// order they were posted in.
    pub fn posts(&self, signed: bool) -> Vec<Post> {
        if signed {
            self.posts.iter().map(|p| p.signed(&self.name)).collect()
        } else {
            self.posts.iter().rev().cloned().collect()
        }
    }

    pub fn timeline(&self, now: DateTime<Utc>) -> Vec<String> {
        self.posts(false).iter().map(|p| p.render(now)).collect()
    }

    /// No de-duplication: following someone twice lists them twice.
    pub fn follow(&mut self, name: impl Into<String>) {
        self.following.push(name.into());
    }

    pub fn following(&self) -> &[String] {
        &self.following
    }

    /// Own posts merged with the posts of `followed`, newest first.
    ///
    /// Only one level is aggregated. The sort is stable with no secondary
    /// key, so posts sharing a timestamp keep their concatenation order.
    pub fn wall<'a>(&self, followed: impl IntoIterator<Item = &'a User>, now: DateTime<Utc>) -> Vec<String> {
        let mut posts = self.posts(true);
        for user in followed {
            posts.extend(user.posts(true));
        }
        posts.sort_by(|a, b| Post::chronological(b, a));
        posts.iter().map(|p| p.render(now)).collect()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
