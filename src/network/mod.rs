pub mod config;
pub mod network;
pub mod snapshot;

pub use config::{NetworkConfig, DEFAULT_LEARNING_RATE};
pub use network::Network;
pub use snapshot::Snapshot;
