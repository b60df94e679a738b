use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

const COMMENT_THREADS_URL: &str = "https://www.googleapis.com/youtube/v3/commentThreads";

/// Comments fetched per page. The platform caps thread pages at 100.
const PAGE_SIZE: usize = 100;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid or unknown video id: {0}")]
    VideoNotFound(String),

    #[error("API quota exceeded or access denied: {0}")]
    QuotaExceeded(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected API response: {0}")]
    Decode(String),
}

/// Supplier of the ordered raw comment stream for one video.
///
/// The pipeline only depends on this seam; the bundled implementation talks
/// to the platform's public API, tests substitute a canned source.
pub trait CommentSource {
    async fn fetch_comments(
        &self,
        video_id: &str,
        max_total: usize,
    ) -> Result<Vec<String>, FetchError>;
}

pub struct YoutubeCommentSource {
    http: reqwest::Client,
    api_key: String,
    page_size: usize,
}

impl YoutubeCommentSource {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            page_size: PAGE_SIZE,
        }
    }

    async fn fetch_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentThreadListResponse, FetchError> {
        let mut request = self.http.get(COMMENT_THREADS_URL).query(&[
            ("part", "snippet,replies"),
            ("videoId", video_id),
            ("textFormat", "plainText"),
            ("key", self.api_key.as_str()),
        ]);
        request = request.query(&[("maxResults", self.page_size.to_string())]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::QuotaExceeded(body));
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::VideoNotFound(video_id.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "API returned status {}",
                status
            )));
        }

        response
            .json::<CommentThreadListResponse>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl CommentSource for YoutubeCommentSource {
    async fn fetch_comments(
        &self,
        video_id: &str,
        max_total: usize,
    ) -> Result<Vec<String>, FetchError> {
        info!("Fetching comments for video {}", video_id);

        let max_pages = (max_total / self.page_size).max(1);
        let mut comments = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.fetch_page(video_id, page_token.as_deref()).await?;
            flatten_threads(page.items, &mut comments);
            pages += 1;
            debug!("Fetched page {}: {} comments so far", pages, comments.len());

            match page.next_page_token {
                Some(token) if pages < max_pages => page_token = Some(token),
                _ => break,
            }
        }

        info!("Fetched {} comments across {} pages", comments.len(), pages);
        Ok(comments)
    }
}

/// Flatten one page into the ordered comment stream: each top-level comment
/// followed by its replies. Reply text arrives with HTML-escaped apostrophes
/// and embedded newlines; both are cleaned here.
fn flatten_threads(items: Vec<CommentThread>, comments: &mut Vec<String>) {
    for item in items {
        comments.push(item.snippet.top_level_comment.snippet.text_display);
        if let Some(replies) = item.replies {
            for reply in replies.comments {
                let text = reply
                    .snippet
                    .text_display
                    .replace("&#39;", "'")
                    .replace('\n', " ");
                comments.push(text);
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadListResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: ThreadSnippet,
    replies: Option<ReplyList>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: Comment,
}

#[derive(Debug, Deserialize)]
struct Comment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_display: String,
}

#[derive(Debug, Deserialize)]
struct ReplyList {
    #[serde(default)]
    comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str = r#"{
        "items": [
            {
                "snippet": {
                    "topLevelComment": {
                        "snippet": { "textDisplay": "Great video!" }
                    }
                },
                "replies": {
                    "comments": [
                        { "snippet": { "textDisplay": "couldn&#39;t agree\nmore" } }
                    ]
                }
            },
            {
                "snippet": {
                    "topLevelComment": {
                        "snippet": { "textDisplay": "Not my thing." }
                    }
                }
            }
        ],
        "nextPageToken": "CAoQAA"
    }"#;

    #[test]
    fn test_page_deserialization() {
        let page: CommentThreadListResponse = serde_json::from_str(SAMPLE_PAGE).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_page_token.as_deref(), Some("CAoQAA"));
        assert!(page.items[0].replies.is_some());
        assert!(page.items[1].replies.is_none());
    }

    #[test]
    fn test_flatten_preserves_order_and_cleans_replies() {
        let page: CommentThreadListResponse = serde_json::from_str(SAMPLE_PAGE).unwrap();
        let mut comments = Vec::new();
        flatten_threads(page.items, &mut comments);

        assert_eq!(
            comments,
            vec![
                "Great video!".to_string(),
                "couldn't agree more".to_string(),
                "Not my thing.".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_page_deserializes() {
        let page: CommentThreadListResponse = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
        assert!(page.next_page_token.is_none());
    }
}
