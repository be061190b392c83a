use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::Mutex;
use redis::{AsyncCommands, Client as RedisClient};

use super::types::WeatherPayload;

// 缓存相关常量
pub const DEFAULT_WEATHER_TTL: Duration = Duration::from_secs(5 * 60);
const WEATHER_CACHE_PREFIX: &str = "weather:";

/// Keyed by lowercased city name.
#[async_trait]
pub trait WeatherCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<WeatherPayload>;
    async fn set(&self, key: &str, data: &WeatherPayload);
}

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: WeatherPayload,
    pub timestamp: Instant,
}

impl CacheEntry {
    pub fn is_fresh(&self, max_age: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.timestamp) < max_age
    }
}

/// Process-local cache. Entries are never evicted, only overwritten; an
/// expired entry simply reads as absent.
#[derive(Debug)]
pub struct MemoryWeatherCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    max_age: Duration,
}

impl MemoryWeatherCache {
    pub fn new(max_age: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_age,
        }
    }

    pub fn entry(&self, key: &str) -> Option<CacheEntry> {
        self.entries.lock().get(key).cloned()
    }
}

impl Default for MemoryWeatherCache {
    fn default() -> Self {
        Self::new(DEFAULT_WEATHER_TTL)
    }
}

#[async_trait]
impl WeatherCache for MemoryWeatherCache {
    async fn get(&self, key: &str) -> Option<WeatherPayload> {
        let entries = self.entries.lock();
        entries
            .get(key)
            .filter(|e| e.is_fresh(self.max_age, Instant::now()))
            .map(|e| e.data.clone())
    }

    async fn set(&self, key: &str, data: &WeatherPayload) {
        self.entries.lock().insert(
            key.to_string(),
            CacheEntry {
                data: data.clone(),
                timestamp: Instant::now(),
            },
        );
    }
}

/// Shared cache for multi-instance deployments. Expiry is delegated to Redis.
pub struct RedisWeatherCache {
    redis: Arc<RedisClient>,
    max_age: Duration,
}

impl RedisWeatherCache {
    pub fn new(redis: Arc<RedisClient>, max_age: Duration) -> Self {
        Self { redis, max_age }
    }
}

#[async_trait]
impl WeatherCache for RedisWeatherCache {
    async fn get(&self, key: &str) -> Option<WeatherPayload> {
        let cache_key = format!("{}{}", WEATHER_CACHE_PREFIX, key);

        let mut conn = match self.redis.get_multiplexed_async_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!("Redis unavailable, skipping weather cache: {}", e);
                return None;
            }
        };

        let cached: redis::RedisResult<Option<String>> = conn.get(&cache_key).await;
        match cached {
            Ok(Some(json_str)) => match serde_json::from_str::<WeatherPayload>(&json_str) {
                Ok(data) => {
                    tracing::debug!("Get weather from cache: {}", cache_key);
                    Some(data)
                }
                Err(e) => {
                    tracing::warn!("Discarding unreadable cache entry {}: {}", cache_key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Redis GET {} failed: {}", cache_key, e);
                None
            }
        }
    }

    async fn set(&self, key: &str, data: &WeatherPayload) {
        let cache_key = format!("{}{}", WEATHER_CACHE_PREFIX, key);

        if let Ok(mut conn) = self.redis.get_multiplexed_async_connection().await {
            if let Ok(json_str) = serde_json::to_string(data) {
                let res: Result<(), redis::RedisError> = conn
                    .set_ex(&cache_key, json_str, self.max_age.as_secs().max(1))
                    .await;
                match res {
                    Ok(()) => tracing::debug!("Set weather to cache: {}", cache_key),
                    Err(e) => tracing::warn!("Redis SET {} failed: {}", cache_key, e),
                }
            }
        }
    }
}
