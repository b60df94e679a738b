use crate::{AnalysisError, Result, Sentiment};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One comment paired with its model score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredComment {
    pub score: f64,
    pub text: String,
}

/// Aggregate view over one scored batch of comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResult {
    pub average: f64,
    pub sentiment: Sentiment,
    /// All comments, highest score first. Equal scores keep fetch order.
    pub ranked: Vec<ScoredComment>,
    /// The `top_k` highest-scored comments, best first.
    pub top_positive: Vec<ScoredComment>,
    /// The `top_k` lowest-scored comments, worst first.
    pub top_negative: Vec<ScoredComment>,
}

/// Compute the mean score, classify it, and rank the comments.
///
/// The ranking is a stable sort on score alone, so comments with identical
/// scores stay in the order they were fetched. Sorting on (score, text)
/// tuples would reorder ties lexicographically instead; that is deliberately
/// not done here.
pub fn aggregate(comments: &[String], scores: &[f64], top_k: usize) -> Result<AggregateResult> {
    if comments.len() != scores.len() {
        return Err(AnalysisError::LengthMismatch(format!(
            "{} comments but {} scores",
            comments.len(),
            scores.len()
        )));
    }

    if comments.len() < top_k {
        return Err(AnalysisError::InsufficientData(format!(
            "top-{} requested but only {} comments available",
            top_k,
            comments.len()
        )));
    }

    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    let sentiment = Sentiment::from_score(average);

    let mut ranked: Vec<ScoredComment> = comments
        .iter()
        .zip(scores.iter())
        .map(|(text, &score)| ScoredComment {
            score,
            text: text.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
    });

    let top_positive = ranked[..top_k].to_vec();
    let top_negative: Vec<ScoredComment> = ranked.iter().rev().take(top_k).cloned().collect();

    tracing::debug!(
        "Aggregated {} comments: average {:.4} ({})",
        comments.len(),
        average,
        sentiment
    );

    Ok(AggregateResult {
        average,
        sentiment,
        ranked,
        top_positive,
        top_negative,
    })
}
