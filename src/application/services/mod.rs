//! Application services - Business logic orchestration

pub mod social_network;

pub use social_network::SocialNetwork;
