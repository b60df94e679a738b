use crate::VocabularyRanking;

/// Pad or truncate an encoded sequence to exactly `target_len` entries.
///
/// Longer sequences keep their LAST `target_len` ranks (the earliest tokens
/// are dropped); shorter ones are prefixed with zeros. This mirrors the
/// padding applied when the model was trained; deviating from it degrades
/// scores silently, so it is covered bit-for-bit by tests.
pub fn pad_or_truncate(seq: &[u32], target_len: usize) -> Vec<u32> {
    if seq.len() >= target_len {
        seq[seq.len() - target_len..].to_vec()
    } else {
        let mut padded = vec![0u32; target_len - seq.len()];
        padded.extend_from_slice(seq);
        padded
    }
}

/// Encodes normalized token sequences into fixed-length rank sequences using
/// a loaded vocabulary ranking.
pub struct SequenceEncoder<'a> {
    ranking: &'a VocabularyRanking,
    max_words: usize,
}

impl<'a> SequenceEncoder<'a> {
    pub fn new(ranking: &'a VocabularyRanking, max_words: usize) -> Self {
        Self { ranking, max_words }
    }

    /// Map each token to its rank, dropping unranked tokens. Order of the
    /// surviving tokens is preserved; no placeholder is emitted.
    pub fn vectorize(&self, tokens: &[String]) -> Vec<u32> {
        tokens
            .iter()
            .filter_map(|token| self.ranking.rank(token))
            .collect()
    }

    /// Vectorize and pad to the configured fixed length.
    pub fn encode(&self, tokens: &[String]) -> Vec<u32> {
        pad_or_truncate(&self.vectorize(tokens), self.max_words)
    }

    pub fn encode_batch(&self, documents: &[Vec<String>]) -> Vec<Vec<u32>> {
        documents.iter().map(|doc| self.encode(doc)).collect()
    }
}
