use crate::models::{ChatMessage, Exchange, NewChatMessage};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteExecutor, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

/// Hard cap for the admin view of all conversations.
pub const MAX_ALL_MESSAGES: i64 = 500;

pub async fn init_db(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    info!("Initializing database at: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // Every connection to :memory: is a separate database
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS chat_messages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            user_name TEXT NOT NULL,
            message TEXT NOT NULL CHECK (length(message) > 0),
            sender TEXT NOT NULL DEFAULT 'user',
            category TEXT NOT NULL DEFAULT 'general',
            topic TEXT,
            is_resolved BOOLEAN NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_chat_messages_user
            ON chat_messages (user_id, created_at);
        "#,
    )
    .execute(&pool)
    .await?;

    info!("Database initialized and migrations applied.");

    Ok(pool)
}

// --- Chat messages ---

pub async fn insert_message<'e, E>(
    executor: E,
    new: NewChatMessage,
) -> Result<ChatMessage, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let created_at = Utc::now().timestamp_millis();

    sqlx::query_as::<_, ChatMessage>(
        r#"
        INSERT INTO chat_messages (user_id, user_name, message, sender, category, topic, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, user_id, user_name, message, sender, category, topic, is_resolved, created_at
        "#,
    )
    .bind(&new.user_id)
    .bind(&new.user_name)
    .bind(&new.message)
    .bind(new.sender)
    .bind(new.category)
    .bind(&new.topic)
    .bind(created_at)
    .fetch_one(executor)
    .await
}

/// Stores a user message and its reply together, or neither.
pub async fn insert_exchange(
    pool: &SqlitePool,
    user_message: NewChatMessage,
    reply_message: NewChatMessage,
) -> Result<Exchange, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let user_message = insert_message(&mut *tx, user_message).await?;
    let reply_message = insert_message(&mut *tx, reply_message).await?;

    tx.commit().await?;

    Ok(Exchange {
        user_message,
        reply_message,
    })
}

/// Oldest first, at most `limit` messages.
pub async fn get_history(
    pool: &SqlitePool,
    user_id: &str,
    limit: i64,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT id, user_id, user_name, message, sender, category, topic, is_resolved, created_at
        FROM chat_messages
        WHERE user_id = ?
        ORDER BY created_at ASC, id ASC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Deletes every message for `user_id` and returns how many were removed.
pub async fn clear_history(pool: &SqlitePool, user_id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM chat_messages WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Newest first across all users, capped at [`MAX_ALL_MESSAGES`].
pub async fn get_all_messages(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT id, user_id, user_name, message, sender, category, topic, is_resolved, created_at
        FROM chat_messages
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(limit.clamp(0, MAX_ALL_MESSAGES))
    .fetch_all(pool)
    .await
}

pub async fn mark_resolved(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE chat_messages SET is_resolved = 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
