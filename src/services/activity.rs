use std::sync::Arc;

use crate::{
    db::ActivityStore,
    error::AppResult,
    models::{popular_resources, PopularResource, TopicCounts, UserRecord},
};

/// Points awarded for completing a resource unless configured otherwise
pub const DEFAULT_POINTS_AWARD: u64 = 10;

/// Trims and lowercases an email, `None` if nothing is left
pub fn normalize_email(email: &str) -> Option<String> {
    let email = email.trim().to_lowercase();
    (!email.is_empty()).then_some(email)
}

/// Records and queries learner activity on top of an [`ActivityStore`]
///
/// Emails are expected to be normalized with [`normalize_email`].
#[derive(Clone)]
pub struct ActivityService {
    store: Arc<dyn ActivityStore>,
    points_award: u64,
}

impl ActivityService {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self {
            store,
            points_award: DEFAULT_POINTS_AWARD,
        }
    }

    pub fn with_points_award(mut self, points_award: u64) -> Self {
        self.points_award = points_award;
        self
    }

    /// Appends the requested topics to the user's history
    ///
    /// The record is created even when none of the topics survive
    /// normalization.
    pub async fn record_topics(&self, email: &str, topics: &[String]) -> AppResult<UserRecord> {
        let topics = topics.to_vec();
        let user = self
            .store
            .update_user(
                email,
                Box::new(move |user: &mut UserRecord| user.record_topics(topics.as_slice())),
            )
            .await?;

        tracing::debug!(
            email = %email,
            history = user.topics.len(),
            store = self.store.name(),
            "Recorded topics"
        );
        Ok(user)
    }

    /// How often the user requested each topic, empty for unknown users
    pub async fn topic_counts(&self, email: &str) -> AppResult<TopicCounts> {
        Ok(self
            .store
            .get_user(email)
            .await?
            .map(|user| user.topic_counts())
            .unwrap_or_default())
    }

    /// Marks a resource as completed, awarding points the first time only
    pub async fn record_completion(&self, email: &str, title: &str) -> AppResult<UserRecord> {
        let award = self.points_award;
        let completed_title = title.to_string();
        let user = self
            .store
            .update_user(
                email,
                Box::new(move |user: &mut UserRecord| {
                    user.complete(&completed_title, award);
                }),
            )
            .await?;

        tracing::info!(
            email = %email,
            title = %title,
            points = user.points,
            completed = user.completed.len(),
            "Recorded completion"
        );
        Ok(user)
    }

    /// Least practiced topic from the user's history
    pub async fn next_topic(&self, email: &str) -> AppResult<String> {
        let user = self.store.get_user(email).await?.unwrap_or_default();
        Ok(user.next_topic())
    }

    /// The user's points, completions and topic history
    pub async fn summary(&self, email: &str) -> AppResult<UserRecord> {
        Ok(self.store.get_user(email).await?.unwrap_or_default())
    }

    /// Completion counts per resource across all users
    pub async fn popular_resources(&self) -> AppResult<Vec<PopularResource>> {
        let document = self.store.load_all().await?;
        Ok(popular_resources(&document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn service() -> ActivityService {
        ActivityService::new(Arc::new(MemoryStore::new()))
    }

    fn topics(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  A@B.com "), Some("a@b.com".to_string()));
        assert_eq!(normalize_email("   "), None);
        assert_eq!(normalize_email(""), None);
    }

    #[tokio::test]
    async fn test_record_topics_and_counts() {
        let activity = service();
        activity
            .record_topics("a@b.com", &topics(&["Python", "web"]))
            .await
            .unwrap();
        activity
            .record_topics("a@b.com", &topics(&[" python "]))
            .await
            .unwrap();

        let counts = activity.topic_counts("a@b.com").await.unwrap();
        assert_eq!(counts.get("python"), Some(&2));
        assert_eq!(counts.get("web"), Some(&1));
    }

    #[tokio::test]
    async fn test_record_topics_creates_user_without_topics() {
        let activity = service();
        let user = activity
            .record_topics("a@b.com", &topics(&["", "  "]))
            .await
            .unwrap();
        assert!(user.topics.is_empty());

        let document = activity.store.load_all().await.unwrap();
        assert!(document.contains_key("a@b.com"));
    }

    #[tokio::test]
    async fn test_topic_counts_unknown_user() {
        let activity = service();
        assert!(activity.topic_counts("nobody@b.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_completion_idempotent() {
        let activity = service();
        let first = activity
            .record_completion("a@b.com", "Flask Basics")
            .await
            .unwrap();
        let second = activity
            .record_completion("a@b.com", "Flask Basics")
            .await
            .unwrap();

        assert_eq!(first.points, 10);
        assert_eq!(second.points, 10);
        assert_eq!(second.completed_titles(), vec!["Flask Basics"]);
    }

    #[tokio::test]
    async fn test_custom_points_award() {
        let activity = service().with_points_award(25);
        let user = activity
            .record_completion("a@b.com", "React Docs")
            .await
            .unwrap();
        assert_eq!(user.points, 25);
    }

    #[tokio::test]
    async fn test_next_topic() {
        let activity = service();
        assert_eq!(activity.next_topic("a@b.com").await.unwrap(), "python");

        activity
            .record_topics("a@b.com", &topics(&["python", "python", "web"]))
            .await
            .unwrap();
        assert_eq!(activity.next_topic("a@b.com").await.unwrap(), "web");
    }

    #[tokio::test]
    async fn test_popular_resources() {
        let activity = service();
        activity.record_completion("a@b.com", "Flask Basics").await.unwrap();
        activity.record_completion("c@d.com", "Flask Basics").await.unwrap();
        activity.record_completion("c@d.com", "React Docs").await.unwrap();

        let popular = activity.popular_resources().await.unwrap();
        assert_eq!(popular.len(), 2);
        assert_eq!(popular[0].title, "Flask Basics");
        assert_eq!(popular[0].completed, 2);
        assert_eq!(popular[1].title, "React Docs");
        assert_eq!(popular[1].completed, 1);
    }

    #[tokio::test]
    async fn test_summary_unknown_user() {
        let activity = service();
        let summary = activity.summary("nobody@b.com").await.unwrap();
        assert_eq!(summary, UserRecord::default());
    }
}
