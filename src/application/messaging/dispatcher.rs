//! Command dispatcher - Routes parsed commands to the social network

use std::sync::Arc;

use super::parser::{CommandParser, ParsedCommand};
use crate::application::errors::SocialError;
use crate::application::services::SocialNetwork;
use crate::domain::entities::CommandRegistry;
use crate::domain::traits::{Clock, UserStore};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::storage::MemoryStore;

/// Dispatcher result: `None` for side effects, rendered lines for reads
pub type DispatchResult = Result<Option<Vec<String>>, SocialError>;

/// The command interpreter: owns one social network and the marker table
pub struct Application<S: UserStore = MemoryStore> {
    parser: CommandParser,
    network: SocialNetwork<S>,
}

impl Application<MemoryStore> {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_network(SocialNetwork::new(clock))
    }
}

impl Default for Application<MemoryStore> {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl<S: UserStore> Application<S> {
    pub fn with_network(network: SocialNetwork<S>) -> Self {
        Self {
            parser: CommandParser::default(),
            network,
        }
    }

    pub fn social_network(&self) -> &SocialNetwork<S> {
        &self.network
    }

    pub fn social_network_mut(&mut self) -> &mut SocialNetwork<S> {
        &mut self.network
    }

    pub fn commands(&self) -> &CommandRegistry {
        self.parser.registry()
    }

    /// Interpret one command line
    pub fn parse_command(&mut self, text: &str) -> DispatchResult {
        let command = self.parser.parse(text)?;
        tracing::debug!("Dispatching {:?}", command);
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: ParsedCommand) -> DispatchResult {
        match command {
            ParsedCommand::Post { user, message } => {
                if !self.network.has_user(&user) {
                    self.network.add_user(&user);
                }
                self.network.add_post(&user, &message)?;
                Ok(None)
            }
            ParsedCommand::Follow { user, target } => {
                self.network.follow(&user, &target)?;
                Ok(None)
            }
            ParsedCommand::Wall { user } => self.network.get_user_wall(&user).map(Some),
            ParsedCommand::Read(text) => {
                if self.network.has_user(&text) {
                    self.network.get_user_timeline(&text).map(Some)
                } else if text.is_empty() || text.contains(char::is_whitespace) {
                    Err(SocialError::InvalidCommand(text))
                } else {
                    Err(SocialError::InvalidUser(text))
                }
            }
        }
    }
}
