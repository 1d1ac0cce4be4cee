pub mod activity;
pub mod resource;
pub mod video;

pub use activity::{
    popular_resources, ActivityDocument, PopularResource, TopicCounts, UserRecord,
    DEFAULT_NEXT_TOPIC,
};
pub use resource::{Catalog, Resource, ScoredResource};
pub use video::{VideoResult, YouTubeSearchResponse};
