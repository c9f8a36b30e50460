//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (User, Role, Member) for testing purposes. These factories create valid
//! Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role, create_test_user};
//!
//! #[test]
//! fn flags_unverified_admin_bot() {
//!     let admin = create_test_role(111111111, "Admin", 0x8, 10);
//!     let user = create_test_user(222222222, "raidbot", true, false);
//!     let member = create_test_member(333333333, user, &[111111111]);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `member::create_test_member` - Create Serenity Member objects

pub mod member;
pub mod role;
pub mod user;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use role::create_test_role;
pub use user::create_test_user;
