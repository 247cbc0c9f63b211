use crate::domain::entities::User;

/// Store trait - owning registry of users keyed by name
pub trait UserStore: Send + Sync {
    fn get(&self, name: &str) -> Option<&User>;
    fn get_mut(&mut self, name: &str) -> Option<&mut User>;

    /// Insert a user, returning the one previously stored under the same name.
    fn insert(&mut self, user: User) -> Option<User>;

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
