//! Database Module Tests
//!
//! Chat message storage on an in-memory SQLite pool.

use crate::database;
use crate::models::{MessageCategory, NewChatMessage, Sender};
use sqlx::sqlite::SqlitePool;

/// Fresh in-memory database with the schema applied
pub(crate) async fn create_test_pool() -> SqlitePool {
    database::init_db("sqlite::memory:")
        .await
        .expect("Failed to create test pool")
}

fn user_line(user_id: &str, text: &str) -> NewChatMessage {
    NewChatMessage {
        user_id: user_id.to_string(),
        user_name: "Test User".to_string(),
        message: text.to_string(),
        sender: Sender::User,
        category: MessageCategory::General,
        topic: None,
    }
}

#[cfg(test)]
mod message_tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_message() {
        let pool = create_test_pool().await;

        let mut new = user_line("user-1", "hello");
        new.category = MessageCategory::Billing;
        new.topic = Some("greeting".to_string());

        let stored = database::insert_message(&pool, new)
            .await
            .expect("Failed to insert message");

        assert!(stored.id > 0);
        assert_eq!(stored.user_id, "user-1");
        assert_eq!(stored.message, "hello");
        assert_eq!(stored.sender, Sender::User);
        assert_eq!(stored.category, MessageCategory::Billing);
        assert_eq!(stored.topic.as_deref(), Some("greeting"));
        assert!(!stored.is_resolved);
        assert!(stored.created_at > 0);
    }

    #[tokio::test]
    async fn test_history_is_oldest_first_and_per_user() {
        let pool = create_test_pool().await;

        for text in ["one", "two", "three"] {
            database::insert_message(&pool, user_line("user-1", text))
                .await
                .unwrap();
        }
        database::insert_message(&pool, user_line("user-2", "other"))
            .await
            .unwrap();

        let history = database::get_history(&pool, "user-1", 50).await.unwrap();
        let texts: Vec<&str> = history.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_history_limit() {
        let pool = create_test_pool().await;

        for i in 0..5 {
            database::insert_message(&pool, user_line("user-1", &format!("msg {}", i)))
                .await
                .unwrap();
        }

        let history = database::get_history(&pool, "user-1", 2).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].message, "msg 0");
    }

    #[tokio::test]
    async fn test_clear_history_only_touches_one_user() {
        let pool = create_test_pool().await;

        database::insert_message(&pool, user_line("user-1", "a")).await.unwrap();
        database::insert_message(&pool, user_line("user-1", "b")).await.unwrap();
        database::insert_message(&pool, user_line("user-2", "c")).await.unwrap();

        let removed = database::clear_history(&pool, "user-1").await.unwrap();
        assert_eq!(removed, 2);
        assert!(database::get_history(&pool, "user-1", 50).await.unwrap().is_empty());
        assert_eq!(database::get_history(&pool, "user-2", 50).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_all_messages_newest_first() {
        let pool = create_test_pool().await;

        database::insert_message(&pool, user_line("user-1", "first")).await.unwrap();
        database::insert_message(&pool, user_line("user-2", "second")).await.unwrap();

        let all = database::get_all_messages(&pool, 500).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].message, "second");
        assert_eq!(all[1].message, "first");
    }

    #[tokio::test]
    async fn test_mark_resolved() {
        let pool = create_test_pool().await;

        let stored = database::insert_message(&pool, user_line("user-1", "bug"))
            .await
            .unwrap();

        assert!(database::mark_resolved(&pool, stored.id).await.unwrap());
        assert!(!database::mark_resolved(&pool, stored.id + 100).await.unwrap());

        let history = database::get_history(&pool, "user-1", 50).await.unwrap();
        assert!(history[0].is_resolved);
    }

    #[tokio::test]
    async fn test_insert_exchange_stores_both() {
        let pool = create_test_pool().await;

        let mut reply = user_line("user-1", "Hello! Great to see you here.");
        reply.sender = Sender::Support;

        let exchange = database::insert_exchange(&pool, user_line("user-1", "hello"), reply)
            .await
            .expect("Failed to insert exchange");

        assert!(exchange.reply_message.id > exchange.user_message.id);
        let history = database::get_history(&pool, "user-1", 50).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].sender, Sender::Support);
    }

    #[tokio::test]
    async fn test_insert_exchange_rolls_back_on_failed_reply() {
        let pool = create_test_pool().await;

        // empty text violates the message CHECK constraint
        let mut reply = user_line("user-1", "");
        reply.sender = Sender::Support;

        let result = database::insert_exchange(&pool, user_line("user-1", "hello"), reply).await;
        assert!(result.is_err());

        assert!(database::get_history(&pool, "user-1", 50).await.unwrap().is_empty());

        // the pool is still usable after the rollback
        database::insert_message(&pool, user_line("user-1", "again")).await.unwrap();
        assert_eq!(database::get_history(&pool, "user-1", 50).await.unwrap().len(), 1);
    }
}
