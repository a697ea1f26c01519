//! # Responder Module
//!
//! Rule-based canned-response engine for the MeetCodeAI support chat.
//! Maps free text to a topic category by ordered keyword rules, then picks
//! one reply from that category's fixed list.
//!
//! ## Components
//! - `category`: closed set of topic buckets
//! - `rules`: keyword rules and the validated response table
//! - `catalog`: the built-in table and its canonical priority order
//! - `picker`: injectable reply selection (random or fixed)
//! - `classifier`: the public entry point

pub mod catalog;
pub mod category;
pub mod classifier;
pub mod picker;
pub mod rules;

pub use category::Category;
pub use classifier::{Classification, ResponseClassifier};
pub use picker::{FixedPicker, RandomPicker, ReplyPicker};
pub use rules::{KeywordRule, ResponseTable, TableError};
