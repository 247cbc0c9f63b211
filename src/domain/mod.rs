//! Domain layer - Core business logic
//! 
//! This layer contains:
//! - Entities: Core business objects (Post, User, Command)
//! - Traits: Abstractions for infrastructure (Clock, UserStore)

pub mod entities;
pub mod traits;
