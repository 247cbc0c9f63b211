//! Domain traits - Abstractions for infrastructure implementations

pub mod clock;
pub mod store;

pub use clock::Clock;
pub use store::UserStore;
