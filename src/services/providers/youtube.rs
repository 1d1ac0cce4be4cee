/// YouTube Data API v3 provider
///
/// Uses the `/search` endpoint restricted to videos. Results are optionally
/// cached in Redis for an hour since the API quota is small.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    cached,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::{VideoResult, YouTubeSearchResponse},
    services::providers::VideoSearchProvider,
};

const VIDEO_CACHE_TTL: u64 = 3600; // 1 hour

#[derive(Clone)]
pub struct YouTubeProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    cache: Option<Cache>,
}

impl YouTubeProvider {
    /// Creates a provider whose requests give up after `timeout`
    pub fn new(
        api_key: String,
        api_url: String,
        timeout: Duration,
        cache: Option<Cache>,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    async fn fetch_videos(&self, query: &str, max_results: usize) -> AppResult<Vec<VideoResult>> {
        let url = format!("{}/search", self.api_url);
        let max_results_param = max_results.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", max_results_param.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "YouTube API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        let search: YouTubeSearchResponse = serde_json::from_str(&response_text).map_err(|e| {
            tracing::debug!(response = %response_text, "Raw YouTube API response");
            AppError::ExternalApi(format!("Failed to parse YouTube response: {}", e))
        })?;

        let videos: Vec<VideoResult> = search
            .items
            .into_iter()
            .filter_map(|item| item.into_video())
            .take(max_results)
            .collect();

        tracing::debug!(
            query = %query,
            results = videos.len(),
            provider = "youtube",
            "Video search completed"
        );

        Ok(videos)
    }
}

#[async_trait::async_trait]
impl VideoSearchProvider for YouTubeProvider {
    async fn search_videos(&self, query: &str, max_results: usize) -> AppResult<Vec<VideoResult>> {
        let query = query.trim();
        if query.is_empty() || max_results == 0 {
            return Ok(Vec::new());
        }

        match &self.cache {
            Some(cache) => cached!(
                cache,
                CacheKey::VideoSearch {
                    query: query.to_string(),
                    max_results,
                },
                VIDEO_CACHE_TTL,
                self.fetch_videos(query, max_results)
            ),
            None => self.fetch_videos(query, max_results).await,
        }
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}
