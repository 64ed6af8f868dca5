pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::sigmoid::Sigmoid;
pub use layers::dense::Layer;
pub use network::{Network, NetworkConfig, Snapshot};
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::trainer::train_network;
pub use error::{NetworkError, Result};
