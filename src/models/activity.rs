use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Topic suggested to users without any history
pub const DEFAULT_NEXT_TOPIC: &str = "python";

/// Topic → number of times the user has requested it
pub type TopicCounts = BTreeMap<String, usize>;

/// Persisted activity for every user, keyed by normalized email
pub type ActivityDocument = BTreeMap<String, UserRecord>;

/// Accumulated activity of a single learner
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Every requested topic in order. Duplicates are kept so they count.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Titles of completed resources, serialized as a sorted array
    #[serde(default)]
    pub completed: BTreeSet<String>,
    #[serde(default)]
    pub points: u64,
}

impl UserRecord {
    /// Appends each non-empty topic, trimmed and lowercased
    pub fn record_topics<S: AsRef<str>>(&mut self, topics: &[S]) {
        self.topics.extend(
            topics
                .iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty()),
        );
    }

    pub fn topic_counts(&self) -> TopicCounts {
        let mut counts = TopicCounts::new();
        for topic in &self.topics {
            *counts.entry(topic.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Marks a title as completed. Points are awarded only the first time.
    ///
    /// Returns whether the title was newly completed.
    pub fn complete(&mut self, title: &str, points_award: u64) -> bool {
        if self.completed.insert(title.to_string()) {
            self.points = self.points.saturating_add(points_award);
            true
        } else {
            false
        }
    }

    /// Least practiced topic, ties broken alphabetically
    pub fn next_topic(&self) -> String {
        self.topic_counts()
            .into_iter()
            .min_by(|(a_topic, a_count), (b_topic, b_count)| {
                a_count.cmp(b_count).then_with(|| a_topic.cmp(b_topic))
            })
            .map(|(topic, _)| topic)
            .unwrap_or_else(|| DEFAULT_NEXT_TOPIC.to_string())
    }

    pub fn completed_titles(&self) -> Vec<String> {
        self.completed.iter().cloned().collect()
    }
}

/// Number of users who completed a given resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PopularResource {
    pub title: String,
    pub completed: usize,
}

/// Counts completions per title across all users
///
/// Sorted by completion count descending, then by title.
pub fn popular_resources(document: &ActivityDocument) -> Vec<PopularResource> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for user in document.values() {
        for title in &user.completed {
            *counts.entry(title.as_str()).or_insert(0) += 1;
        }
    }

    let mut popular: Vec<PopularResource> = counts
        .into_iter()
        .map(|(title, completed)| PopularResource {
            title: title.to_string(),
            completed,
        })
        .collect();
    popular.sort_by(|a, b| b.completed.cmp(&a.completed).then_with(|| a.title.cmp(&b.title)));
    popular
}
