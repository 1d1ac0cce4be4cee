use tokio::sync::RwLock;

use super::activity_store::{ActivityStore, UserUpdate};
use crate::{
    error::AppResult,
    models::{ActivityDocument, UserRecord},
};

/// Volatile activity store, used for tests and ephemeral runs
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<ActivityDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records
    pub fn with_users(users: ActivityDocument) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait::async_trait]
impl ActivityStore for MemoryStore {
    async fn load_all(&self) -> AppResult<ActivityDocument> {
        Ok(self.users.read().await.clone())
    }

    async fn get_user(&self, email: &str) -> AppResult<Option<UserRecord>> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn update_user(&self, email: &str, update: UserUpdate) -> AppResult<UserRecord> {
        let mut users = self.users.write().await;
        let user = users.entry(email.to_string()).or_default();
        update(user);
        Ok(user.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_creates_user() {
        let store = MemoryStore::new();
        let user = store
            .update_user("a@b.com", Box::new(|user: &mut UserRecord| user.record_topics(&["web"])))
            .await
            .unwrap();
        assert_eq!(user.topics, vec!["web"]);
        assert_eq!(store.get_user("a@b.com").await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_with_users() {
        let mut users = ActivityDocument::new();
        users.insert("a@b.com".to_string(), UserRecord::default());
        let store = MemoryStore::with_users(users);
        assert_eq!(store.load_all().await.unwrap().len(), 1);
    }
}
