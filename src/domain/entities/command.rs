use std::fmt;

/// What a command marker asks the network to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Post,
    Follow,
    Wall,
}

impl Action {
    /// Name used in validation messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Post => "posting",
            Action::Follow => "following",
            Action::Wall => "wall",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a marker split an operand came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Username,
    Message,
    Target,
}

impl Operand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operand::Username => "username",
            Operand::Message => "message",
            Operand::Target => "user to follow",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A textual marker bound to an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub marker: String,
    pub action: Action,
}

impl Command {
    pub fn new(marker: impl Into<String>, action: Action) -> Self {
        Self {
            marker: marker.into(),
            action,
        }
    }

    /// Split `input` around the first occurrence of the marker, trimming both parts.
    pub fn split<'a>(&self, input: &'a str) -> Option<(&'a str, &'a str)> {
        input
            .split_once(self.marker.as_str())
            .map(|(left, right)| (left.trim(), right.trim()))
    }
}

/// Ordered marker table. The first command whose marker occurs in the input wins.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posting, following and wall, in that order.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Command::new("->", Action::Post));
        registry.register(Command::new("follows", Action::Follow));
        registry.register(Command::new("wall", Action::Wall));
        registry
    }

    /// Appends after the commands already registered, so it is matched last.
    pub fn register(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn find(&self, input: &str) -> Option<&Command> {
        self.commands.iter().find(|c| input.contains(c.marker.as_str()))
    }

    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
