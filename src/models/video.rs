use serde::{Deserialize, Serialize};

/// A supplementary video suggestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoResult {
    pub title: String,
    pub description: String,
    pub link: String,
}

// ============================================================================
// YouTube Data API Types
// ============================================================================

/// Response from GET /search
#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeSearchResponse {
    #[serde(default)]
    pub items: Vec<YouTubeSearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeSearchItem {
    #[serde(default)]
    pub id: Option<YouTubeItemId>,
    #[serde(default)]
    pub snippet: Option<YouTubeSnippet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeItemId {
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeSnippet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl YouTubeSearchItem {
    /// Converts to a result, skipping items that are not videos
    pub fn into_video(self) -> Option<VideoResult> {
        let video_id = self
            .id
            .and_then(|id| id.video_id)
            .filter(|id| !id.is_empty())?;
        let snippet = self.snippet.unwrap_or(YouTubeSnippet {
            title: None,
            description: None,
        });

        Some(VideoResult {
            title: snippet
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "YouTube Video".to_string()),
            description: snippet.description.unwrap_or_default(),
            link: format!("https://www.youtube.com/watch?v={}", video_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_item_to_video() {
        let json = r#"{
            "id": {"kind": "youtube#video", "videoId": "abc123"},
            "snippet": {"title": "Flask in 10 minutes", "description": "Quick intro"}
        }"#;

        let item: YouTubeSearchItem = serde_json::from_str(json).unwrap();
        let video = item.into_video().unwrap();
        assert_eq!(video.title, "Flask in 10 minutes");
        assert_eq!(video.description, "Quick intro");
        assert_eq!(video.link, "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn test_search_item_defaults() {
        let json = r#"{"id": {"videoId": "xyz"}}"#;
        let item: YouTubeSearchItem = serde_json::from_str(json).unwrap();
        let video = item.into_video().unwrap();
        assert_eq!(video.title, "YouTube Video");
        assert_eq!(video.description, "");
    }

    #[test]
    fn test_channel_item_skipped() {
        let json = r#"{"id": {"kind": "youtube#channel", "channelId": "UC123"}, "snippet": {"title": "A channel"}}"#;
        let item: YouTubeSearchItem = serde_json::from_str(json).unwrap();
        assert!(item.into_video().is_none());
    }
}
