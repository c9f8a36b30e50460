//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Blacklist enforcement, bypass approval, bot scans
//! - **Orchestration**: Coordinating repositories with the Discord gateway and the bot session
//! - **Domain Models**: Working with domain models rather than DTOs or persisted documents
//!
//! Services that talk to Discord receive a `ModerationGateway` instead of serenity
//! handles, so they can be exercised against a recording mock.

pub mod auth;
pub mod blacklist;
pub mod bypass;
pub mod dev;
pub mod enforcement;
pub mod history;
pub mod incident;
pub mod scanner;
pub mod settings;

#[cfg(test)]
mod test;
