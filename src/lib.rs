pub mod math;
pub mod activation;
pub mod error;
pub mod layers;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::sigmoid::sigmoid;
pub use error::PerceptronError;
pub use layers::perceptron::Perceptron;
pub use loss::mse::MseLoss;
pub use train::trainer::{train_epoch, train_epochs};
