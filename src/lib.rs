//! Pawboard - terminal admin console for a pet social network.
//!
//! The console signs an administrator in against the network's admin REST API
//! and manages dogs, FAQs, breeds, hobbies, likes, reports, sub-admins and
//! coin gifting from paginated, searchable tables.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "pawboard";
