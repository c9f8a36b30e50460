//! Dashboard API backend and Discord moderation bot.
//!
//! The backend uses Axum as the web framework, a JSON settings document for
//! persistence and Serenity for the Discord gateway session.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and access control
//! - **Service Layer** (`service/`) - Enforcement, bypass workflow, scans and dashboard operations
//! - **Data Layer** (`data/`) - The cached settings document and one repository per record family
//! - **Model Layer** (`model/`) - Domain models and bot-facing parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the operator guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (store, HTTP clients, bot manager)
//! - **Startup** (`startup`) - Session, CORS, HTTP and OAuth client setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron job for the suspicious bot scan
//! - **Bot** (`bot/`) - Gateway session lifecycle, event handlers and the moderation gateway
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Controller** checks the session through `AuthGuard` and calls a service
//! 3. **Service** applies the business rules, reaching Discord through `ModerationGateway`
//! 4. **Data** reads or mutates the cached document, flushing it to disk on writes
//! 5. **Controller** serializes the result as JSON

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
