//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Clock: System and manual time sources
//! - Config: Configuration loading
//! - Storage: In-memory user registry
//! - Adapters: Console shell

pub mod adapters;
pub mod clock;
pub mod config;
pub mod storage;
