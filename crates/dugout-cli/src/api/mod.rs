//! API client module
//!
//! HTTP client for interacting with the Dugout server.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::ApiClient;
pub use endpoints::UploadKind;
pub use types::*;
