//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod elapsed;
pub mod post;
pub mod user;

pub use command::{Action, Command, CommandRegistry, Operand};
pub use elapsed::Elapsed;
pub use post::Post;
pub use user::User;
