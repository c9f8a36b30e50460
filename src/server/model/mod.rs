//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! the persisted settings document's records and the parameters of bot-facing
//! operations. Records stored in the settings document serialize with camelCase keys,
//! which is also the shape the dashboard receives.

pub mod ban;
pub mod bot_account;
pub mod bypass;
pub mod moderation;
pub mod settings;
pub mod suspicious_bot;
