//! Command handling - Parsing and dispatching

pub mod dispatcher;
pub mod parser;

pub use dispatcher::{Application, DispatchResult};
pub use parser::{CommandParser, ParsedCommand};
