use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the JSON document holding per-user activity
    #[serde(default = "default_activity_file")]
    pub activity_file: PathBuf,

    /// Optional JSON file replacing the built-in resource catalog
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,

    /// YouTube Data API key. Video lookup is disabled without it.
    #[serde(default)]
    pub youtube_api_key: Option<String>,

    /// YouTube Data API base URL
    #[serde(default = "default_youtube_api_url")]
    pub youtube_api_url: String,

    /// Upper bound on supplementary video results per request
    #[serde(default = "default_video_max_results")]
    pub video_max_results: usize,

    /// Timeout for the outbound video search call
    #[serde(default = "default_video_timeout_secs")]
    pub video_timeout_secs: u64,

    /// Redis connection URL for caching video lookups
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Points awarded for each distinct completed resource
    #[serde(default = "default_points_award")]
    pub points_award: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_activity_file() -> PathBuf {
    PathBuf::from("data/activity.json")
}

fn default_youtube_api_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_video_max_results() -> usize {
    3
}

fn default_video_timeout_secs() -> u64 {
    10
}

fn default_points_award() -> u64 {
    10
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// The video API key, treating an empty value as unset
    pub fn youtube_api_key(&self) -> Option<&str> {
        self.youtube_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// The Redis URL, treating an empty value as unset
    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
