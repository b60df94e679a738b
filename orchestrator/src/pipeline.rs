use anyhow::Result;
use tracing::info;

use crate::client::CommentSource;

use analysis::AggregateResult;
use inference::SentimentModel;
use preprocessing::{PipelineConfig, SequenceEncoder, TextNormalizer, VocabularyRanking};

/// One invocation of the text-to-score pipeline: fetch, normalize, encode,
/// score, aggregate. No retries and no partial results; the first failing
/// stage aborts the run.
pub struct SentimentPipeline<S: CommentSource> {
    source: S,
    ranking: VocabularyRanking,
    model: SentimentModel,
    config: PipelineConfig,
}

impl<S: CommentSource> SentimentPipeline<S> {
    pub fn new(
        source: S,
        ranking: VocabularyRanking,
        model: SentimentModel,
        config: PipelineConfig,
    ) -> Self {
        Self {
            source,
            ranking,
            model,
            config,
        }
    }

    pub async fn run(&mut self, video_id: &str, max_comments: usize) -> Result<AggregateResult> {
        let comments = self.source.fetch_comments(video_id, max_comments).await?;
        info!("Scoring {} comments", comments.len());

        let normalizer = TextNormalizer::from_config(&self.config);
        let documents: Vec<Vec<String>> = comments
            .iter()
            .map(|comment| normalizer.normalize(comment))
            .collect();

        let encoder = SequenceEncoder::new(&self.ranking, self.config.max_words);
        let padded = encoder.encode_batch(&documents);

        let scores = self.model.score_batch(&padded)?;

        let result = analysis::aggregate(&comments, &scores, self.config.top_k)?;
        info!(
            "Average sentiment {:.4} ({}) over {} comments",
            result.average,
            result.sentiment,
            comments.len()
        );
        Ok(result)
    }
}
