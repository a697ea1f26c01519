//! Test Module
//!
//! Crate-level test suites for the support desk core.
//!
//! ## Test Categories
//! - `responder_tests`: catalog scenarios, priority shadowing, reply reachability
//! - `database_tests`: chat message storage
//! - `desk_tests`: validation, rate limiting and persisted exchanges

pub mod database_tests;
