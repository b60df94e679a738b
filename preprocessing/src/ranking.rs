use crate::{PreprocessingError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Frequency ranking of the training vocabulary: token → rank, where rank 1
/// is the most frequent token of the training corpus.
///
/// Built once offline and loaded read-only at inference time. The vectorizer
/// looks tokens up here; anything absent from the map (filtered during the
/// build or past the cap) is simply dropped from the encoded sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyRanking {
    ranks: HashMap<String, u32>,
}

impl VocabularyRanking {
    /// Count token frequencies across the corpus and assign dense ranks in
    /// descending frequency order. Ties keep first-occurrence order of the
    /// corpus scan, so the same pass always produces the same ranking.
    /// Only ranks strictly below `vocab_cap` are kept.
    pub fn build(corpus: &[Vec<String>], vocab_cap: u32) -> Result<Self> {
        let mut counts: IndexMap<&str, u64> = IndexMap::new();
        for document in corpus {
            for token in document {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        if counts.is_empty() {
            return Err(PreprocessingError::CorpusEmpty(format!(
                "{} documents produced no tokens",
                corpus.len()
            )));
        }

        // Stable sort over the insertion-ordered counts: equal frequencies
        // stay in first-seen order.
        let mut by_frequency: Vec<(&str, u64)> = counts.into_iter().collect();
        by_frequency.sort_by(|a, b| b.1.cmp(&a.1));

        let mut ranks = HashMap::new();
        for (index, (token, _count)) in by_frequency.into_iter().enumerate() {
            let rank = index as u32 + 1;
            if rank >= vocab_cap {
                break;
            }
            ranks.insert(token.to_string(), rank);
        }

        tracing::info!("Built vocabulary ranking with {} entries", ranks.len());
        Ok(Self { ranks })
    }

    /// Construct a ranking from explicit entries. Intended for tests and
    /// tooling; the offline builder is the normal producer.
    pub fn from_entries(entries: HashMap<String, u32>) -> Self {
        Self { ranks: entries }
    }

    pub fn rank(&self, token: &str) -> Option<u32> {
        self.ranks.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Persist the ranking as a binary artifact.
    pub fn save(&self, path: &Path) -> Result<()> {
        let encoded = bincode::serialize(&self.ranks)?;
        std::fs::write(path, encoded)?;
        tracing::info!(
            "Saved vocabulary ranking ({} entries) to {:?}",
            self.ranks.len(),
            path
        );
        Ok(())
    }

    /// Load a previously saved ranking artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            PreprocessingError::RankingNotFound(format!("{}: {}", path.display(), e))
        })?;
        let ranks: HashMap<String, u32> = bincode::deserialize(&bytes).map_err(|e| {
            PreprocessingError::RankingNotFound(format!("{}: {}", path.display(), e))
        })?;

        tracing::info!(
            "Loaded vocabulary ranking ({} entries) from {:?}",
            ranks.len(),
            path
        );
        Ok(Self { ranks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_ranks_follow_descending_frequency() {
        let corpus = vec![
            doc(&["good", "good", "good", "great", "great", "awful"]),
            doc(&["good", "great"]),
        ];
        let ranking = VocabularyRanking::build(&corpus, 15_000).unwrap();

        assert_eq!(ranking.rank("good"), Some(1));
        assert_eq!(ranking.rank("great"), Some(2));
        assert_eq!(ranking.rank("awful"), Some(3));
        assert_eq!(ranking.rank("missing"), None);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let corpus = vec![doc(&["zebra", "apple", "zebra", "apple", "mango"])];
        let ranking = VocabularyRanking::build(&corpus, 15_000).unwrap();

        // zebra and apple tie at two occurrences; zebra was seen first
        assert_eq!(ranking.rank("zebra"), Some(1));
        assert_eq!(ranking.rank("apple"), Some(2));
        assert_eq!(ranking.rank("mango"), Some(3));
    }

    #[test]
    fn test_cap_excludes_ranks_at_and_above_it() {
        let corpus = vec![doc(&["one", "one", "one", "two", "two", "three"])];
        let ranking = VocabularyRanking::build(&corpus, 3).unwrap();

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking.rank("one"), Some(1));
        assert_eq!(ranking.rank("two"), Some(2));
        assert_eq!(ranking.rank("three"), None);
    }

    #[test]
    fn test_empty_corpus_fails() {
        let corpus: Vec<Vec<String>> = vec![vec![], vec![]];
        let result = VocabularyRanking::build(&corpus, 15_000);
        assert!(matches!(result, Err(PreprocessingError::CorpusEmpty(_))));
    }

    #[test]
    fn test_save_load_round_trip() {
        let corpus = vec![doc(&["good", "good", "bad", "ugly", "bad", "good"])];
        let ranking = VocabularyRanking::build(&corpus, 15_000).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.bin");
        ranking.save(&path).unwrap();

        let reloaded = VocabularyRanking::load(&path).unwrap();
        assert_eq!(ranking, reloaded);
    }

    #[test]
    fn test_load_missing_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = VocabularyRanking::load(&dir.path().join("nope.bin"));
        assert!(matches!(
            result,
            Err(PreprocessingError::RankingNotFound(_))
        ));
    }

    #[test]
    fn test_load_corrupt_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.bin");
        std::fs::write(&path, b"not a ranking").unwrap();
        let result = VocabularyRanking::load(&path);
        assert!(matches!(
            result,
            Err(PreprocessingError::RankingNotFound(_))
        ));
    }
}
