//! Command parser - Turns raw text into structured commands

use crate::application::errors::SocialError;
use crate::domain::entities::{Action, CommandRegistry, Operand};

/// A command after marker matching and operand validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Post { user: String, message: String },
    Follow { user: String, target: String },
    Wall { user: String },
    /// No marker matched; the trimmed input, possibly a user name
    Read(String),
}

/// Parses incoming text against an ordered marker table
pub struct CommandParser {
    registry: CommandRegistry,
}

impl CommandParser {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Parse a command line
    pub fn parse(&self, text: &str) -> Result<ParsedCommand, SocialError> {
        let text = text.trim();

        let Some(command) = self.registry.find(text) else {
            return Ok(ParsedCommand::Read(text.to_string()));
        };
        let Some((left, right)) = command.split(text) else {
            return Err(SocialError::InvalidCommand(text.to_string()));
        };

        let action = command.action;
        if left.is_empty() {
            return Err(SocialError::EmptyOperand { action, side: Operand::Username });
        }

        match action {
            Action::Post if right.is_empty() => Err(SocialError::EmptyOperand { action, side: Operand::Message }),
            Action::Post => Ok(ParsedCommand::Post {
                user: left.to_string(),
                message: right.to_string(),
            }),
            Action::Follow if right.is_empty() => Err(SocialError::EmptyOperand { action, side: Operand::Target }),
            Action::Follow => Ok(ParsedCommand::Follow {
                user: left.to_string(),
                target: right.to_string(),
            }),
            // `wall` takes nothing after the marker
            Action::Wall if !right.is_empty() => Err(SocialError::InvalidCommand(text.to_string())),
            Action::Wall => Ok(ParsedCommand::Wall { user: left.to_string() }),
        }
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(CommandRegistry::with_defaults())
    }
}
