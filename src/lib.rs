//! A small social networking command interpreter.
//!
//! Users post messages with `<user> -> <message>`, follow each other with
//! `<user> follows <another user>`, read a timeline by typing a user name and
//! see an aggregated wall with `<user> wall`.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::errors::{ConfigError, SocialError};
pub use application::messaging::Application;
pub use application::services::SocialNetwork;
