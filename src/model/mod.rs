//! Data transfer objects exchanged with the dashboard frontend.
//!
//! Every DTO serializes with camelCase keys and carries Discord IDs as strings, since
//! snowflakes exceed the integer precision of JavaScript numbers.

pub mod api;
pub mod blacklist;
pub mod bot;
pub mod bypass;
pub mod dev;
pub mod discord;
pub mod handshake;
