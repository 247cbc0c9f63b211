//! Application layer errors

use thiserror::Error;

use crate::domain::entities::{Action, Operand};

/// Errors raised while interpreting a command
///
/// All of them are input validation failures; the caller reports the message
/// and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SocialError {
    #[error("User {0} does not exist")]
    UnknownUser(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Invalid {action} command: {side} is empty")]
    EmptyOperand { action: Action, side: Operand },

    #[error("Invalid user: {0}")]
    InvalidUser(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
