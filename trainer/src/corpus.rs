use anyhow::{Context, Result};
use preprocessing::TextNormalizer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One normalized training document with its binary sentiment label.
#[derive(Debug, Clone)]
pub struct LabeledDocument {
    pub tokens: Vec<String>,
    pub label: u8,
}

/// Load a labeled corpus laid out as `<root>/neg/*.txt` (label 0) and
/// `<root>/pos/*.txt` (label 1), one document per file, each normalized with
/// the same procedure inference uses.
///
/// Files are visited in sorted path order so the corpus scan — and with it
/// the frequency-tie order of the resulting ranking — is reproducible.
pub fn load_labeled_corpus(root: &Path, normalizer: &TextNormalizer) -> Result<Vec<LabeledDocument>> {
    let mut documents = Vec::new();
    read_labeled_dir(&root.join("neg"), 0, normalizer, &mut documents)?;
    read_labeled_dir(&root.join("pos"), 1, normalizer, &mut documents)?;
    Ok(documents)
}

fn read_labeled_dir(
    dir: &Path,
    label: u8,
    normalizer: &TextNormalizer,
    documents: &mut Vec<LabeledDocument>,
) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Cannot read corpus directory {:?}", dir))?;

    let mut paths: Vec<_> = entries
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Cannot list corpus directory {:?}", dir))?;
    paths.sort();

    for path in paths {
        if !path.is_file() {
            continue;
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read corpus file {:?}", path))?;
        documents.push(LabeledDocument {
            tokens: normalizer.normalize(&text),
            label,
        });
    }

    Ok(())
}

/// Train/validation bookkeeping handed to the external model-training step:
/// padded rank sequences, binary labels, and the pipeline constants they
/// were produced with.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingDataset {
    pub train_sequences: Vec<Vec<u32>>,
    pub train_labels: Vec<u8>,
    pub val_sequences: Vec<Vec<u32>>,
    pub val_labels: Vec<u8>,
    pub max_words: usize,
    pub vocab_cap: u32,
}

impl TrainingDataset {
    pub fn save(&self, path: &Path) -> Result<()> {
        let encoded = bincode::serialize(self).context("Cannot serialize training dataset")?;
        fs::write(path, encoded)
            .with_context(|| format!("Cannot write training dataset to {:?}", path))?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Cannot read training dataset from {:?}", path))?;
        bincode::deserialize(&bytes).context("Cannot decode training dataset")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_corpus(root: &Path) {
        fs::create_dir_all(root.join("pos")).unwrap();
        fs::create_dir_all(root.join("neg")).unwrap();
        fs::write(root.join("pos/0.txt"), "Absolutely loved this film!").unwrap();
        fs::write(root.join("pos/1.txt"), "great acting, great story").unwrap();
        fs::write(root.join("neg/0.txt"), "terrible waste of time").unwrap();
    }

    #[test]
    fn test_load_labeled_corpus() {
        let dir = tempfile::tempdir().unwrap();
        write_corpus(dir.path());

        let normalizer = TextNormalizer::new(3);
        let documents = load_labeled_corpus(dir.path(), &normalizer).unwrap();

        assert_eq!(documents.len(), 3);
        // neg documents come first, then pos
        assert_eq!(documents[0].label, 0);
        assert_eq!(documents[0].tokens[0], "terrible");
        assert_eq!(documents[1].label, 1);
        assert_eq!(documents[2].tokens, vec!["great", "acting", "great", "story"]);
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let normalizer = TextNormalizer::new(3);
        assert!(load_labeled_corpus(dir.path(), &normalizer).is_err());
    }

    #[test]
    fn test_dataset_round_trip() {
        let dataset = TrainingDataset {
            train_sequences: vec![vec![0, 0, 1, 2], vec![0, 3, 4, 5]],
            train_labels: vec![1, 0],
            val_sequences: vec![vec![0, 0, 0, 6]],
            val_labels: vec![1],
            max_words: 4,
            vocab_cap: 100,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("training_data.bin");
        dataset.save(&path).unwrap();

        let reloaded = TrainingDataset::load(&path).unwrap();
        assert_eq!(reloaded.train_sequences, dataset.train_sequences);
        assert_eq!(reloaded.train_labels, dataset.train_labels);
        assert_eq!(reloaded.val_sequences, dataset.val_sequences);
        assert_eq!(reloaded.val_labels, dataset.val_labels);
        assert_eq!(reloaded.max_words, 4);
        assert_eq!(reloaded.vocab_cap, 100);
    }
}
