use moka::future::Cache;
use redis::{Client, RedisError, aio::ConnectionManager};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use std::time::Duration;

use crate::models::admin::DashboardStats;

#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
}

impl RedisCache {
    pub async fn new(redis_url: &str) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self { connection })
    }

    /// Get a value from cache
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> redis::RedisResult<Option<T>> {
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut self.connection.clone())
            .await?;

        match value {
            Some(v) => {
                let deserialized = serde_json::from_str(&v).map_err(|e| {
                    redis::RedisError::from((
                        redis::ErrorKind::TypeError,
                        "Deserialization error",
                        e.to_string(),
                    ))
                })?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// Set a value with a TTL
    pub async fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> redis::RedisResult<()> {
        let serialized = serde_json::to_string(value).map_err(|e| {
            redis::RedisError::from((
                redis::ErrorKind::TypeError,
                "Serialization error",
                e.to_string(),
            ))
        })?;

        redis::cmd("SET")
            .arg(key)
            .arg(serialized)
            .arg("EX")
            .arg(ttl.as_secs().max(1))
            .query_async(&mut self.connection.clone())
            .await
    }

    pub async fn delete(&self, key: &str) -> redis::RedisResult<()> {
        redis::cmd("DEL")
            .arg(key)
            .query_async(&mut self.connection.clone())
            .await
    }

    /// Drop a key and only log on failure; a stale entry expires on its own.
    pub async fn invalidate(&self, key: &str) {
        if let Err(e) = self.delete(key).await {
            tracing::warn!(key, "Cache invalidation failed: {e}");
        }
    }
}

/// Cache key generators
pub mod keys {
    pub fn package(id: &str) -> String {
        format!("package:{}", id)
    }

    pub fn hotel(id: &str) -> String {
        format!("hotel:{}", id)
    }
}

/// In-process cache for the admin dashboard aggregate.
#[derive(Clone)]
pub struct StatsCache {
    inner: Cache<&'static str, DashboardStats>,
}

impl StatsCache {
    const DASHBOARD: &'static str = "dashboard";

    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Cache::builder().time_to_live(ttl).max_capacity(1).build(),
        }
    }

    pub async fn dashboard(&self) -> Option<DashboardStats> {
        self.inner.get(Self::DASHBOARD).await
    }

    pub async fn store_dashboard(&self, stats: DashboardStats) {
        self.inner.insert(Self::DASHBOARD, stats).await;
    }

    pub async fn clear(&self) {
        self.inner.invalidate(Self::DASHBOARD).await;
    }
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub package_ttl: Duration,
    pub hotel_ttl: Duration,
    pub dashboard_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            package_ttl: Duration::from_secs(600), // 10 minutes
            hotel_ttl: Duration::from_secs(600),
            dashboard_ttl: Duration::from_secs(30),
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self {
            package_ttl: parse_duration_secs("CACHE_TTL_PACKAGE", 600),
            hotel_ttl: parse_duration_secs("CACHE_TTL_HOTEL", 600),
            dashboard_ttl: parse_duration_secs("CACHE_TTL_DASHBOARD", 30),
        }
    }
}

fn parse_duration_secs(env_var: &str, default: u64) -> Duration {
    std::env::var(env_var)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default))
}

/// Wrapper types for Actix-web app data
pub type CacheData = Arc<RedisCache>;
pub type StatsData = Arc<StatsCache>;
