pub mod activity;
pub mod providers;
pub mod recommendations;
pub mod scoring;
pub mod summarizer;

pub use activity::{normalize_email, ActivityService};
pub use providers::{lookup_videos, VideoSearchProvider, YouTubeProvider};
pub use recommendations::{RecommendationQuery, Recommendations, Recommender};
