// Post-inference aggregation and ranking of sentiment scores

pub mod aggregate;

pub use aggregate::{aggregate, AggregateResult, ScoredComment};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Length mismatch: {0}")]
    LengthMismatch(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

/// Scores above this value classify as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.6;
/// Scores below this value classify as negative.
pub const NEGATIVE_THRESHOLD: f64 = 0.4;

/// Three-valued sentiment classification of a model score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(Sentiment::from_score(0.61), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0.39), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(0.5), Sentiment::Neutral);
        // boundary values are neutral, not positive/negative
        assert_eq!(Sentiment::from_score(POSITIVE_THRESHOLD), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(NEGATIVE_THRESHOLD), Sentiment::Neutral);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Sentiment::Positive.to_string(), "Positive");
        assert_eq!(Sentiment::Negative.to_string(), "Negative");
        assert_eq!(Sentiment::Neutral.to_string(), "Neutral");
    }
}
