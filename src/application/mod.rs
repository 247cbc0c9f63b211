//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: The social network
//! - Errors: Domain-specific errors
//! - Messaging: Command parsing and dispatching

pub mod errors;
pub mod messaging;
pub mod services;
