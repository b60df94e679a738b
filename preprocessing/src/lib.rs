// Comment text preprocessing library

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod normalize;
pub mod ranking;
pub mod vectorize;

pub use config::PipelineConfig;
pub use error::{PreprocessingError, Result};
pub use normalize::TextNormalizer;
pub use ranking::VocabularyRanking;
pub use vectorize::{pad_or_truncate, SequenceEncoder};
