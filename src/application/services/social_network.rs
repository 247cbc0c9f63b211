use std::sync::Arc;

use crate::application::errors::SocialError;
use crate::domain::entities::User;
use crate::domain::traits::{Clock, UserStore};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::storage::MemoryStore;

/// Service owning every user and the follow graph between them
pub struct SocialNetwork<S: UserStore = MemoryStore> {
    users: S,
    clock: Arc<dyn Clock>,
}

impl SocialNetwork<MemoryStore> {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_store(MemoryStore::new(), clock)
    }
}

impl Default for SocialNetwork<MemoryStore> {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl<S: UserStore> SocialNetwork<S> {
    pub fn with_store(users: S, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Register a user. An existing user with the same name is replaced,
    /// posts and follows included.
    pub fn add_user(&mut self, name: &str) {
        if self.users.insert(User::new(name)).is_some() {
            tracing::warn!("User {} re-registered, previous posts dropped", name);
        } else {
            tracing::debug!("Registered user {}", name);
        }
    }

    pub fn has_user(&self, name: &str) -> bool {
        self.users.contains(name)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn add_post(&mut self, name: &str, content: &str) -> Result<(), SocialError> {
        let clock = Arc::clone(&self.clock);
        self.user_mut(name)?.add_post(content, clock.as_ref());
        tracing::debug!("{} posted {:?}", name, content);
        Ok(())
    }

    pub fn get_user_timeline(&self, name: &str) -> Result<Vec<String>, SocialError> {
        Ok(self.user(name)?.timeline(self.clock.now()))
    }

    pub fn follow(&mut self, name: &str, target: &str) -> Result<(), SocialError> {
        if !self.has_user(target) {
            return Err(SocialError::UnknownUser(target.to_string()));
        }
        self.user_mut(name)?.follow(target);
        tracing::debug!("{} follows {}", name, target);
        Ok(())
    }

    pub fn get_following(&self, name: &str) -> Result<Vec<String>, SocialError> {
        Ok(self.user(name)?.following().to_vec())
    }

    /// Own posts plus those of directly followed users, newest first.
    pub fn get_user_wall(&self, name: &str) -> Result<Vec<String>, SocialError> {
        let user = self.user(name)?;
        let followed = user.following().iter().filter_map(|target| {
            let found = self.users.get(target);
            if found.is_none() {
                tracing::warn!("{} follows unknown user {}", name, target);
            }
            found
        });
        Ok(user.wall(followed, self.clock.now()))
    }

    fn user(&self, name: &str) -> Result<&User, SocialError> {
        self.users
            .get(name)
            .ok_or_else(|| SocialError::UnknownUser(name.to_string()))
    }

    fn user_mut(&mut self, name: &str) -> Result<&mut User, SocialError> {
        self.users
            .get_mut(name)
            .ok_or_else(|| SocialError::UnknownUser(name.to_string()))
    }
}
