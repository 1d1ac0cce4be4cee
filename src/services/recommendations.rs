use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{Catalog, ScoredResource, TopicCounts, VideoResult},
    services::{
        activity::ActivityService,
        providers::{lookup_videos, VideoSearchProvider},
        scoring::{apply_history_boost, score_resources},
    },
};

/// A recommendation request after validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationQuery {
    /// Normalized email of an identified learner
    pub email: Option<String>,
    /// Requested topics as sent, normalized during scoring
    pub topics: Vec<String>,
    /// Search query for supplementary videos
    pub video_query: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    pub recommendations: Vec<ScoredResource>,
    pub youtube: Vec<VideoResult>,
}

/// Generates learning recommendations
///
/// Resources are ranked by how many of their tags match the requested topics.
/// For an identified learner the requested topics are first appended to their
/// history, and resources touching any topic from that history get a bonus
/// point. Video suggestions are fetched for the first requested topic.
pub struct Recommender<'a> {
    pub catalog: &'a Catalog,
    pub activity: &'a ActivityService,
    pub videos: Option<&'a dyn VideoSearchProvider>,
    pub video_max_results: usize,
}

impl Recommender<'_> {
    pub async fn recommend(&self, query: RecommendationQuery) -> AppResult<Recommendations> {
        let history = match &query.email {
            Some(email) => self
                .activity
                .record_topics(email, &query.topics)
                .await?
                .topic_counts(),
            None => TopicCounts::new(),
        };

        let resources = self.catalog.resources();
        let scored = score_resources(resources, &query.topics);
        let recommendations = apply_history_boost(resources, scored, &history);

        let youtube = match &query.video_query {
            Some(video_query) => {
                lookup_videos(self.videos, video_query, self.video_max_results).await
            }
            None => Vec::new(),
        };

        tracing::info!(
            identified = query.email.is_some(),
            topics = query.topics.len(),
            recommendations = recommendations.len(),
            videos = youtube.len(),
            "Recommendations generated"
        );

        Ok(Recommendations {
            recommendations,
            youtube,
        })
    }
}
