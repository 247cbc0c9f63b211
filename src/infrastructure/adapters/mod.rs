//! Frontends that feed commands into the application

pub mod console;

pub use console::ConsoleAdapter;
