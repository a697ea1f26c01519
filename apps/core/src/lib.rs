//! MeetCodeAI support desk core.
//!
//! The [`responder`] module is the canned-response engine; the rest of the
//! crate is the desk around it: validation, rate limiting and chat history.

pub mod config;
pub mod database;
pub mod desk;
pub mod error;
pub mod fs_manager;
pub mod logging;
pub mod models;
pub mod rate_limiter;
pub mod responder;

pub use config::ChatConfig;
pub use desk::ChatDesk;
pub use error::AppError;
pub use responder::{Category, Classification, ResponseClassifier, ResponseTable};

#[cfg(test)]
mod tests;
