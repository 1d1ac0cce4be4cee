/// Supplementary video search
///
/// Video suggestions are an optional enrichment of recommendations. Providers
/// report failures through `AppResult`; [`lookup_videos`] is the boundary
/// where a failure is logged and degraded to an empty list.
use crate::{error::AppResult, models::VideoResult};

pub mod youtube;

pub use youtube::YouTubeProvider;

/// Trait for video search backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait VideoSearchProvider: Send + Sync {
    /// Searches for videos matching `query`, returning at most `max_results`
    async fn search_videos(&self, query: &str, max_results: usize) -> AppResult<Vec<VideoResult>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Best-effort video lookup
///
/// Returns an empty list when no provider is configured, the query is blank,
/// or the provider fails. Failures are logged, never propagated. No retries.
pub async fn lookup_videos(
    provider: Option<&dyn VideoSearchProvider>,
    query: &str,
    max_results: usize,
) -> Vec<VideoResult> {
    let Some(provider) = provider else {
        tracing::debug!("No video provider configured, skipping lookup");
        return Vec::new();
    };

    let query = query.trim();
    if query.is_empty() || max_results == 0 {
        return Vec::new();
    }

    match provider.search_videos(query, max_results).await {
        Ok(mut videos) => {
            videos.truncate(max_results);
            tracing::info!(
                query = %query,
                results = videos.len(),
                provider = provider.name(),
                "Video lookup completed"
            );
            videos
        }
        Err(e) => {
            tracing::warn!(
                query = %query,
                provider = provider.name(),
                error = %e,
                "Video lookup failed, continuing without videos"
            );
            Vec::new()
        }
    }
}
