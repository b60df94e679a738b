use anyhow::{ensure, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

mod corpus;

use corpus::{load_labeled_corpus, TrainingDataset};
use preprocessing::{PipelineConfig, SequenceEncoder, TextNormalizer, VocabularyRanking};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding pos/ and neg/ subdirectories of text documents
    corpus: PathBuf,

    /// Output path for the vocabulary ranking artifact
    #[arg(long, default_value = "ranking.bin")]
    ranking_out: PathBuf,

    /// Output path for the train/validation dataset artifact
    #[arg(long, default_value = "training_data.bin")]
    dataset_out: PathBuf,

    /// Fraction of documents held out for validation
    #[arg(long, default_value = "0.2")]
    val_fraction: f64,

    /// Shuffle seed; fixed so the emitted split is reproducible
    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    ensure!(
        (0.0..1.0).contains(&args.val_fraction),
        "Validation fraction must be in [0, 1), got {}",
        args.val_fraction
    );

    let config = PipelineConfig::from_env_or_default();
    config.validate()?;
    info!("Building vocabulary ranking from corpus {:?}", args.corpus);

    let normalizer = TextNormalizer::from_config(&config);
    let mut documents = load_labeled_corpus(&args.corpus, &normalizer)?;
    info!("Loaded {} labeled documents", documents.len());

    let mut rng = StdRng::seed_from_u64(args.seed);
    documents.shuffle(&mut rng);

    let token_docs: Vec<Vec<String>> = documents.iter().map(|d| d.tokens.clone()).collect();
    let labels: Vec<u8> = documents.iter().map(|d| d.label).collect();

    let ranking = VocabularyRanking::build(&token_docs, config.vocab_cap)?;
    ranking.save(&args.ranking_out)?;

    let encoder = SequenceEncoder::new(&ranking, config.max_words);
    let sequences = encoder.encode_batch(&token_docs);

    let val_count = (documents.len() as f64 * args.val_fraction).round() as usize;
    let train_count = documents.len() - val_count;

    let dataset = TrainingDataset {
        train_sequences: sequences[..train_count].to_vec(),
        train_labels: labels[..train_count].to_vec(),
        val_sequences: sequences[train_count..].to_vec(),
        val_labels: labels[train_count..].to_vec(),
        max_words: config.max_words,
        vocab_cap: config.vocab_cap,
    };
    dataset.save(&args.dataset_out)?;

    info!(
        "Emitted ranking ({} entries) and dataset ({} train / {} validation) for model training",
        ranking.len(),
        train_count,
        val_count
    );
    Ok(())
}
