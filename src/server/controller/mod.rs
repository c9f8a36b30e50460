//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, hand the request to a service and
//! serialize the result. Handlers that need Discord look up the running bot session
//! per request, since the session can be restarted or switched at any time.

pub mod auth;
pub mod blacklist;
pub mod bot;
pub mod bypass;
pub mod dev;
pub mod handshake;
pub mod history;
pub mod settings;

use crate::server::bot::gateway::{ModerationGateway, SerenityGateway};

/// Borrows the optional session handle as the gateway trait object services take.
fn as_gateway(gateway: &Option<SerenityGateway>) -> Option<&dyn ModerationGateway> {
    gateway.as_ref().map(|g| g as &dyn ModerationGateway)
}
