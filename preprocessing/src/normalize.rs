use crate::PipelineConfig;

/// The ASCII punctuation set stripped from raw text before tokenizing.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Turns raw comment text into the token stream the ranking and model were
/// trained on: punctuation stripped, whitespace split, short words dropped,
/// the rest lowercased.
///
/// The length filter runs BEFORE lowercasing; this ordering is part of the
/// trained procedure and must not be swapped.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    word_min_length: usize,
}

impl TextNormalizer {
    pub fn new(word_min_length: usize) -> Self {
        Self { word_min_length }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.word_min_length)
    }

    pub fn normalize(&self, text: &str) -> Vec<String> {
        let stripped: String = text.chars().filter(|c| !is_punctuation(*c)).collect();

        stripped
            .split_whitespace()
            .filter(|word| word.chars().count() >= self.word_min_length)
            .map(|word| word.to_lowercase())
            .collect()
    }
}

fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}
