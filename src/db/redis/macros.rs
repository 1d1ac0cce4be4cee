/// Serves a value from the Redis cache, computing and caching it on a miss.
///
/// A failed cache read is logged and treated as a miss, so an unavailable
/// Redis only costs the cache, never the request. The computed value is
/// written back in the background.
///
/// # Arguments
/// * `$cache`: a [`Cache`](crate::db::Cache)
/// * `$key`: the [`CacheKey`](crate::db::CacheKey) to read and write
/// * `$ttl`: time-to-live of the written value, in seconds
/// * `$block`: future producing `AppResult<T>` on a miss
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        let key = $key;
        match $cache.get_from_cache(&key).await {
            Ok(Some(cached)) => {
                tracing::debug!(key = %key, "Cache hit");
                Ok(cached)
            }
            lookup => {
                if let Err(e) = lookup {
                    tracing::warn!(key = %key, error = %e, "Cache read failed, bypassing cache");
                }
                let value = $block.await?;
                $cache.set_in_background(&key, &value, $ttl);
                Ok(value)
            }
        }
    }};
}
