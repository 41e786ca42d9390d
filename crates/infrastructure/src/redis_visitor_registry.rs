//! Redis-backed visitor registry shared by every API instance.

use async_trait::async_trait;
use chrono::NaiveDate;
use inkpost_application::VisitorRegistry;
use inkpost_core::{AppError, AppResult};
use redis::AsyncCommands;

/// Daily visitor sets outlive their day by this long so late writes still dedupe.
const VISITOR_SET_TTL_SECONDS: i64 = 2 * 24 * 60 * 60;

/// Redis implementation of the visitor registry port. One set per day.
#[derive(Clone)]
pub struct RedisVisitorRegistry {
    client: redis::Client,
    key_prefix: String,
}

impl RedisVisitorRegistry {
    /// Creates a registry with a configured Redis client and key prefix.
    #[must_use]
    pub fn new(client: redis::Client, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
        }
    }

    fn key_for(&self, day: NaiveDate) -> String {
        format!("{}:{}", self.key_prefix, day.format("%Y-%m-%d"))
    }
}

#[async_trait]
impl VisitorRegistry for RedisVisitorRegistry {
    async fn register_visit(&self, day: NaiveDate, visitor: &str) -> AppResult<bool> {
        let key = self.key_for(day);
        let mut connection = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|error| AppError::Internal(format!("failed to connect to redis: {error}")))?;

        let added: i64 = connection
            .sadd(&key, visitor)
            .await
            .map_err(|error| AppError::Internal(format!("failed to record visitor: {error}")))?;

        if added > 0 {
            let () = connection
                .expire(&key, VISITOR_SET_TTL_SECONDS)
                .await
                .map_err(|error| {
                    AppError::Internal(format!("failed to expire visitor set: {error}"))
                })?;
        }

        Ok(added > 0)
    }
}
