use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

mod client;
mod output;
mod pipeline;

use client::YoutubeCommentSource;
use inference::SentimentModel;
use output::ResultFormatter;
use pipeline::SentimentPipeline;
use preprocessing::{PipelineConfig, VocabularyRanking};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Id of the video whose comments will be scored
    video_id: String,

    /// Path to the pre-trained scoring model artifact
    model: PathBuf,

    /// Path to the vocabulary ranking artifact
    #[arg(long, default_value = "ranking.bin")]
    ranking: PathBuf,

    /// Upper bound on the number of comments fetched
    #[arg(long, default_value = "7500")]
    max_comments: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    info!("Starting comment sentiment scoring");
    info!("Video: {}", args.video_id);
    info!("Model: {:?}", args.model);
    info!("Ranking: {:?}", args.ranking);

    let api_key = std::env::var("YOUTUBE_API_KEY")
        .context("YOUTUBE_API_KEY must be set (environment or .env file)")?;

    let config = PipelineConfig::from_env_or_default();
    config.validate()?;

    let ranking = VocabularyRanking::load(&args.ranking)?;
    let model = SentimentModel::load(&args.model, config.max_words)?;
    let source = YoutubeCommentSource::new(api_key);

    let formatter = ResultFormatter::new();
    let mut pipeline = SentimentPipeline::new(source, ranking, model, config);
    let result = pipeline.run(&args.video_id, args.max_comments).await?;

    formatter.display_result(&args.video_id, &result);

    info!("Scoring completed successfully");
    Ok(())
}
