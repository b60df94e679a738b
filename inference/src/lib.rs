// ONNX model runtime wrapper for sentiment scoring

pub mod error;
pub mod model;

pub use error::{InferenceError, Result};
pub use model::SentimentModel;
