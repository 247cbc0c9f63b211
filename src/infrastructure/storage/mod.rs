//! In-memory user storage

use std::collections::HashMap;

use crate::domain::entities::User;
use crate::domain::traits::UserStore;

/// `HashMap`-backed user registry
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: HashMap<String, User>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryStore {
    fn get(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut User> {
        self.users.get_mut(name)
    }

    fn insert(&mut self, user: User) -> Option<User> {
        self.users.insert(user.name().to_string(), user)
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}
