//! Redis-backed sessions. One key per token, expiring after the configured TTL.

use redis::Client as RedisClient;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;

fn session_key(token: &str) -> String {
    format!("session:{token}")
}

/// Stores `user` under a fresh token and returns the token.
pub async fn create_session(
    redis: &RedisClient,
    user: &User,
    ttl_secs: u64,
) -> Result<String, AppError> {
    let token = Uuid::new_v4().to_string();
    let payload = serde_json::to_string(user).map_err(|e| AppError::Internal(e.into()))?;

    let mut conn = redis.get_multiplexed_async_connection().await?;
    redis::cmd("SET")
        .arg(session_key(&token))
        .arg(payload)
        .arg("EX")
        .arg(ttl_secs)
        .query_async::<_, ()>(&mut conn)
        .await?;

    info!("Opened session for user {} ({})", user.id, user.role.as_str());
    Ok(token)
}

/// Resolves a token to its user. `None` when expired or unknown.
pub async fn load_session(redis: &RedisClient, token: &str) -> Result<Option<User>, AppError> {
    let mut conn = redis.get_multiplexed_async_connection().await?;
    let payload: Option<String> = redis::cmd("GET")
        .arg(session_key(token))
        .query_async(&mut conn)
        .await?;

    match payload {
        Some(raw) => match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("Discarding unreadable session payload: {e}");
                Ok(None)
            }
        },
        None => Ok(None),
    }
}

pub async fn delete_session(redis: &RedisClient, token: &str) -> Result<(), AppError> {
    let mut conn = redis.get_multiplexed_async_connection().await?;
    redis::cmd("DEL")
        .arg(session_key(token))
        .query_async::<_, ()>(&mut conn)
        .await?;
    Ok(())
}

/// Rewrites the stored user for an existing session, keeping its remaining TTL.
pub async fn refresh_session_user(
    redis: &RedisClient,
    token: &str,
    user: &User,
) -> Result<(), AppError> {
    let payload = serde_json::to_string(user).map_err(|e| AppError::Internal(e.into()))?;
    let mut conn = redis.get_multiplexed_async_connection().await?;
    redis::cmd("SET")
        .arg(session_key(token))
        .arg(payload)
        .arg("KEEPTTL")
        .query_async::<_, ()>(&mut conn)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_is_namespaced() {
        assert_eq!(session_key("abc"), "session:abc");
    }
}
