use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    db::{ActivityStore, Cache, JsonFileStore},
    models::Catalog,
    services::{ActivityService, Recommender, VideoSearchProvider, YouTubeProvider},
};

const DEFAULT_VIDEO_MAX_RESULTS: usize = 3;

/// Shared application state
pub struct AppState {
    pub catalog: Catalog,
    pub activity: ActivityService,
    pub videos: Option<Arc<dyn VideoSearchProvider>>,
    pub video_max_results: usize,
}

impl AppState {
    /// Creates state with video lookup disabled and the default points award
    pub fn new(catalog: Catalog, store: Arc<dyn ActivityStore>) -> Self {
        Self {
            catalog,
            activity: ActivityService::new(store),
            videos: None,
            video_max_results: DEFAULT_VIDEO_MAX_RESULTS,
        }
    }

    pub fn with_video_provider(
        mut self,
        provider: Arc<dyn VideoSearchProvider>,
        max_results: usize,
    ) -> Self {
        self.videos = Some(provider);
        self.video_max_results = max_results;
        self
    }

    pub fn with_points_award(mut self, points_award: u64) -> Self {
        self.activity = self.activity.with_points_award(points_award);
        self
    }

    /// Builds state from configuration
    ///
    /// Opens (or creates) the activity document and enables video lookup when
    /// an API key is configured.
    pub async fn from_config(config: &Config, cache: Option<Cache>) -> anyhow::Result<Self> {
        let catalog = match &config.catalog_file {
            Some(path) => {
                let catalog = Catalog::from_json_file(path)?;
                tracing::info!(path = ?path, resources = catalog.len(), "Loaded catalog file");
                catalog
            }
            None => Catalog::builtin(),
        };

        let store = JsonFileStore::open(&config.activity_file).await?;
        tracing::info!(path = ?store.path(), "Activity store ready");

        let mut state =
            Self::new(catalog, Arc::new(store)).with_points_award(config.points_award);

        match config.youtube_api_key() {
            Some(api_key) => {
                let provider = YouTubeProvider::new(
                    api_key.to_string(),
                    config.youtube_api_url.clone(),
                    Duration::from_secs(config.video_timeout_secs),
                    cache,
                )?;
                state = state.with_video_provider(Arc::new(provider), config.video_max_results);
                tracing::info!(
                    max_results = config.video_max_results,
                    "YouTube video lookup enabled"
                );
            }
            None => tracing::info!("YOUTUBE_API_KEY not set, video lookup disabled"),
        }

        Ok(state)
    }

    pub fn recommender(&self) -> Recommender<'_> {
        Recommender {
            catalog: &self.catalog,
            activity: &self.activity,
            videos: self.videos.as_deref(),
            video_max_results: self.video_max_results,
        }
    }
}
