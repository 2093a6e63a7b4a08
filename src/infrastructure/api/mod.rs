//! Admin REST API adapter.

mod client;
mod envelope;

pub use client::ApiClient;
pub use envelope::{Envelope, PageMeta};
