use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::{ActivityDocument, UserRecord},
};

/// A mutation applied to one user's record inside a store transaction
pub type UserUpdate = Box<dyn FnOnce(&mut UserRecord) + Send>;

/// Persistence for per-user activity
///
/// Implementations must apply `update_user` atomically with respect to other
/// updates made through the same store, so concurrent requests never lose
/// each other's writes.
#[async_trait::async_trait]
pub trait ActivityStore: Send + Sync {
    /// Loads every user record
    async fn load_all(&self) -> AppResult<ActivityDocument>;

    /// Loads one user's record, `None` if the user has no activity yet
    async fn get_user(&self, email: &str) -> AppResult<Option<UserRecord>> {
        Ok(self.load_all().await?.remove(email))
    }

    /// Applies `update` to the user's record, creating it if absent, and persists it
    ///
    /// Returns the record as stored after the update.
    async fn update_user(&self, email: &str, update: UserUpdate) -> AppResult<UserRecord>;

    /// Store name for logging
    fn name(&self) -> &'static str;
}

/// Activity store persisted as a single pretty-printed JSON document
///
/// Every update rewrites the whole document. Updates are serialized behind a
/// mutex and the file is replaced through a rename, so readers never observe
/// a half-written document.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens the store, creating parent directories and an empty document if needed
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let store = Self {
            path,
            write_lock: Mutex::new(()),
        };

        if !tokio::fs::try_exists(&store.path).await? {
            store.write_document(&ActivityDocument::new()).await?;
            tracing::info!(path = ?store.path, "Created empty activity document");
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn read_document(&self) -> AppResult<ActivityDocument> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = ?self.path, "Activity document missing, treating as empty");
                return Ok(ActivityDocument::new());
            }
            Err(e) => {
                tracing::error!(path = ?self.path, error = %e, "Failed to read activity document");
                return Err(AppError::from(e));
            }
        };

        if raw.trim().is_empty() {
            return Ok(ActivityDocument::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            tracing::error!(path = ?self.path, error = %e, "Activity document is corrupt");
            AppError::from(e)
        })
    }

    async fn write_document(&self, document: &ActivityDocument) -> AppResult<()> {
        let json = serde_json::to_string_pretty(document)?;
        let temp_path = self.temp_path();

        tokio::fs::write(&temp_path, json).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityStore for JsonFileStore {
    async fn load_all(&self) -> AppResult<ActivityDocument> {
        self.read_document().await
    }

    async fn update_user(&self, email: &str, update: UserUpdate) -> AppResult<UserRecord> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read_document().await?;
        let user = document.entry(email.to_string()).or_default();
        update(user);
        let updated = user.clone();

        self.write_document(&document).await?;
        tracing::debug!(email = %email, users = document.len(), "Activity document saved");

        Ok(updated)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}
