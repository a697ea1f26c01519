//! Support desk: the caller side of the responder.
//!
//! Validates and rate-limits incoming chat messages, asks the
//! [`ResponseClassifier`] for a reply and stores both sides of the exchange.

use sqlx::sqlite::SqlitePool;
use std::sync::Mutex;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::config::ChatConfig;
use crate::database;
use crate::error::AppError;
use crate::models::{
    ChatMessage, ChatUser, Exchange, IncomingMessage, MessageCategory, NewChatMessage, Sender,
    SUPPORT_NAME,
};
use crate::rate_limiter::RateLimiter;
use crate::responder::{Classification, RandomPicker, ReplyPicker, ResponseClassifier};

/// A message that passed validation and rate limiting, with its reply chosen.
struct Accepted {
    text: String,
    category: MessageCategory,
    classification: Classification,
}

pub struct ChatDesk {
    classifier: ResponseClassifier,
    pool: SqlitePool,
    limiter: Mutex<RateLimiter>,
    history_limit: i64,
}

impl ChatDesk {
    pub fn new(
        classifier: ResponseClassifier,
        pool: SqlitePool,
        limiter: RateLimiter,
        history_limit: i64,
    ) -> Self {
        Self {
            classifier,
            pool,
            limiter: Mutex::new(limiter),
            history_limit,
        }
    }

    /// Builds a desk from configuration, loading the response table once.
    pub fn from_config(config: &ChatConfig, pool: SqlitePool) -> Result<Self, AppError> {
        let classifier = ResponseClassifier::new(config.response_table()?);
        let limiter = RateLimiter::new(config.rate_limit, config.rate_window);
        Ok(Self::new(classifier, pool, limiter, config.history_limit))
    }

    pub fn classifier(&self) -> &ResponseClassifier {
        &self.classifier
    }

    /// Handles one user message with a random reply.
    #[instrument(skip(self, incoming), fields(user_id = %user.id))]
    pub async fn send_message(
        &self,
        user: &ChatUser,
        incoming: IncomingMessage,
    ) -> Result<Exchange, AppError> {
        let accepted = self.accept(user, incoming, &mut RandomPicker::thread())?;
        self.record(user, accepted).await
    }

    /// Same as [`send_message`](Self::send_message) with a caller-chosen picker.
    #[instrument(skip(self, incoming, picker), fields(user_id = %user.id))]
    pub async fn send_message_with<P>(
        &self,
        user: &ChatUser,
        incoming: IncomingMessage,
        picker: &mut P,
    ) -> Result<Exchange, AppError>
    where
        P: ReplyPicker + Send + ?Sized,
    {
        let accepted = self.accept(user, incoming, picker)?;
        self.record(user, accepted).await
    }

    fn accept<P>(
        &self,
        user: &ChatUser,
        incoming: IncomingMessage,
        picker: &mut P,
    ) -> Result<Accepted, AppError>
    where
        P: ReplyPicker + ?Sized,
    {
        let incoming = IncomingMessage {
            message: incoming.message.trim().to_string(),
            category: incoming.category,
        };
        if incoming.message.is_empty() {
            return Err(AppError::Validation("Message cannot be empty".into()));
        }
        incoming.validate()?;

        let allowed = self
            .limiter
            .lock()
            .map_err(|e| AppError::Internal(format!("Rate limiter lock poisoned: {}", e)))?
            .check(&user.id);
        if !allowed {
            warn!("Rate limit hit for user {}", user.id);
            return Err(AppError::RateLimited);
        }

        let classification = self.classifier.classify_with(&incoming.message, picker);

        Ok(Accepted {
            text: incoming.message,
            category: incoming.category.unwrap_or_default(),
            classification,
        })
    }

    async fn record(&self, user: &ChatUser, accepted: Accepted) -> Result<Exchange, AppError> {
        let topic = accepted.classification.category.label().to_string();

        let exchange = database::insert_exchange(
            &self.pool,
            NewChatMessage {
                user_id: user.id.clone(),
                user_name: user.name.clone(),
                message: accepted.text,
                sender: Sender::User,
                category: accepted.category,
                topic: Some(topic.clone()),
            },
            NewChatMessage {
                user_id: user.id.clone(),
                user_name: SUPPORT_NAME.to_string(),
                message: accepted.classification.reply,
                sender: Sender::Support,
                category: accepted.category,
                topic: Some(topic),
            },
        )
        .await?;

        info!(
            "Stored exchange {} -> {} (topic: {})",
            exchange.user_message.id,
            exchange.reply_message.id,
            accepted.classification.category
        );

        Ok(exchange)
    }

    /// Conversation for `user_id`, oldest first. Defaults to the configured page size.
    pub async fn history(
        &self,
        user_id: &str,
        limit: Option<i64>,
    ) -> Result<Vec<ChatMessage>, AppError> {
        let limit = limit.unwrap_or(self.history_limit).max(0);
        Ok(database::get_history(&self.pool, user_id, limit).await?)
    }

    pub async fn clear_history(&self, user_id: &str) -> Result<u64, AppError> {
        let removed = database::clear_history(&self.pool, user_id).await?;
        info!("Cleared {} messages for user {}", removed, user_id);
        Ok(removed)
    }

    /// Admin view across users, newest first.
    pub async fn all_messages(&self) -> Result<Vec<ChatMessage>, AppError> {
        Ok(database::get_all_messages(&self.pool, database::MAX_ALL_MESSAGES).await?)
    }

    /// Marks a stored message resolved. Returns `false` if no such message exists.
    pub async fn mark_resolved(&self, message_id: i64) -> Result<bool, AppError> {
        Ok(database::mark_resolved(&self.pool, message_id).await?)
    }
}
