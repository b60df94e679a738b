use crate::Result;

/// Pipeline constants shared between the offline trainer and inference.
///
/// These values are baked into the trained ranking/model pairing: a ranking
/// built with one `vocab_cap` or a model trained on one `max_words` cannot
/// be used with different values at inference time.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Minimum character length of a token; shorter words are dropped.
    pub word_min_length: usize,
    /// Fixed length every encoded sequence is padded or truncated to.
    pub max_words: usize,
    /// Vocabulary cap; only ranks strictly below this value are kept.
    pub vocab_cap: u32,
    /// Number of extreme comments reported at each end of the ranking.
    pub top_k: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            word_min_length: 3,
            max_words: 1500,
            vocab_cap: 15_000,
            top_k: 3,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(min_length_str) = std::env::var("VIDSENT_WORD_MIN_LENGTH") {
            if let Ok(min_length) = min_length_str.parse::<usize>() {
                config.word_min_length = min_length;
            }
        }

        if let Ok(max_words_str) = std::env::var("VIDSENT_MAX_WORDS") {
            if let Ok(max_words) = max_words_str.parse::<usize>() {
                config.max_words = max_words;
            }
        }

        if let Ok(vocab_cap_str) = std::env::var("VIDSENT_VOCAB_CAP") {
            if let Ok(vocab_cap) = vocab_cap_str.parse::<u32>() {
                config.vocab_cap = vocab_cap;
            }
        }

        if let Ok(top_k_str) = std::env::var("VIDSENT_TOP_K") {
            if let Ok(top_k) = top_k_str.parse::<usize>() {
                config.top_k = top_k;
            }
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.word_min_length == 0 {
            return Err(crate::error::PreprocessingError::Config(
                "Minimum word length must be greater than zero".to_string(),
            ));
        }

        if self.max_words == 0 {
            return Err(crate::error::PreprocessingError::Config(
                "Sequence length must be greater than zero".to_string(),
            ));
        }

        if self.vocab_cap < 2 {
            return Err(crate::error::PreprocessingError::Config(
                "Vocabulary cap must admit at least one rank".to_string(),
            ));
        }

        if self.top_k == 0 {
            return Err(crate::error::PreprocessingError::Config(
                "Top-k must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
