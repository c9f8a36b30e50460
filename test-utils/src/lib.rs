//! Guild Guard Test Utils
//!
//! Provides shared testing utilities for building unit tests for the guild guard dashboard.
//! This crate offers a builder pattern for creating test contexts backed by a temporary
//! settings document on disk, plus factories for Serenity model objects.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for seeding the settings document
//! - **TestContext**: Test environment owning the temporary directory and session
//! - **TestError**: Error types that can occur during test setup
//! - **serenity**: Factories for `User`, `Role` and `Member` objects
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_blacklist_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_global_blacklist(&["111"])
//!         .with_active_bot("bot-b")
//!         .build()?;
//!
//!     let store = SettingsStore::load(test.store_path())?;
//!     // Perform store operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
