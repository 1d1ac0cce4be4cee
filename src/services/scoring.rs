use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::{Resource, ScoredResource, TopicCounts};

/// Trims, lowercases and deduplicates requested topics, dropping empty ones
pub fn normalize_topics<S: AsRef<str>>(topics: &[S]) -> BTreeSet<String> {
    topics
        .iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Highest score first, ties by ascending title
fn rank_order(a: &ScoredResource, b: &ScoredResource) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.title.cmp(&b.title))
}

/// Scores resources by the number of tags shared with the requested topics
///
/// Resources sharing no tag are left out. An empty topic list yields no
/// recommendations rather than an error.
pub fn score_resources<S: AsRef<str>>(resources: &[Resource], topics: &[S]) -> Vec<ScoredResource> {
    let topics = normalize_topics(topics);
    tracing::debug!(normalized_topics = ?topics, "Scoring resources");

    if topics.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredResource> = resources
        .iter()
        .filter_map(|resource| {
            let tags = resource.normalized_tags();
            let score = tags.iter().filter(|tag| topics.contains(*tag)).count() as u32;
            tracing::debug!(
                resource = %resource.title,
                tags = ?tags,
                score,
                "Resource scored"
            );
            (score > 0).then(|| ScoredResource::from_resource(resource, score))
        })
        .collect();

    scored.sort_by(rank_order);
    scored
}

/// Adds one point to each scored resource tagged with any topic from the user's history
///
/// Only resources already present in `scored` are considered, so the boost
/// never brings back a resource without tag overlap.
pub fn apply_history_boost(
    resources: &[Resource],
    scored: Vec<ScoredResource>,
    history: &TopicCounts,
) -> Vec<ScoredResource> {
    if history.is_empty() {
        return scored;
    }

    let mut boosted: Vec<ScoredResource> = scored
        .into_iter()
        .map(|mut item| {
            let seen_before = resources
                .iter()
                .find(|r| r.title == item.title)
                .map(|r| r.normalized_tags().iter().any(|tag| history.contains_key(tag)))
                .unwrap_or(false);
            if seen_before {
                item.score += 1;
            }
            item
        })
        .collect();

    boosted.sort_by(rank_order);
    boosted
}
