use analysis::{AggregateResult, ScoredComment};
use chrono::{DateTime, Utc};

pub struct ResultFormatter {
    start_time: DateTime<Utc>,
}

impl ResultFormatter {
    pub fn new() -> Self {
        Self {
            start_time: Utc::now(),
        }
    }

    pub fn display_result(&self, video_id: &str, result: &AggregateResult) {
        println!("\n{}", "=".repeat(80));
        println!("VIDEO COMMENT SENTIMENT REPORT");
        println!("{}", "=".repeat(80));

        println!("Video: {}", video_id);
        println!("Comments analyzed: {}", result.ranked.len());
        println!("Average Sentiment: {}", result.sentiment);
        println!("Average Sentiment Value: {:.4}", result.average);

        println!("\n{}", "-".repeat(40));
        println!("Top {} Positive Comments:", result.top_positive.len());
        println!("{}", "-".repeat(40));
        self.display_entries(&result.top_positive);

        println!("\n{}", "-".repeat(40));
        println!("Top {} Negative Comments:", result.top_negative.len());
        println!("{}", "-".repeat(40));
        self.display_entries(&result.top_negative);

        self.display_summary(result.ranked.len());
    }

    fn display_entries(&self, entries: &[ScoredComment]) {
        for (position, entry) in entries.iter().enumerate() {
            println!(
                "{}. {:.4} : {}",
                position + 1,
                entry.score,
                self.truncate_text(&entry.text, 100)
            );
        }
    }

    fn display_summary(&self, comment_count: usize) {
        let runtime = Utc::now().signed_duration_since(self.start_time);
        println!("\n{}", "-".repeat(40));
        println!("Comments scored: {}", comment_count);
        println!("Runtime: {}s", runtime.num_seconds());
    }

    fn truncate_text(&self, text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let truncated: String = text.chars().take(max_chars).collect();
            format!("{}...", truncated)
        }
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        let formatter = ResultFormatter::new();
        assert_eq!(formatter.truncate_text("short", 10), "short");
        assert_eq!(formatter.truncate_text("0123456789abc", 10), "0123456789...");
    }
}
