pub mod activity_store;
pub mod memory;
pub mod redis;

pub use activity_store::{ActivityStore, JsonFileStore, UserUpdate};
pub use memory::MemoryStore;
pub use self::redis::create_redis_client;
pub use self::redis::Cache;
pub use self::redis::CacheKey;
pub use self::redis::CacheWriterHandle;
