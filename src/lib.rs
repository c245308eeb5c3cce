//! # Bookmark Client
//!
//! Async client library for a personal geographic-bookmarks backend.
//!
//! An authenticated user keeps a collection of saved points of interest
//! (latitude/longitude plus a type tag and a display name) on a remote
//! server. This crate translates four logical operations into authenticated
//! HTTP calls and normalizes their outcomes:
//!
//! - save a bookmark
//! - list bookmarks
//! - delete a bookmark by id
//! - get the bookmark count
//!
//! Requests carry a short-lived bearer token obtained from an injected
//! [`session::interface::AuthProvider`]; the backend base URL comes from an
//! injected [`config::Config`]. Every call is a single round trip: there is
//! no retry, caching, or pagination layer in this crate.
//!
//! # Example
//! ```ignore
//! use bookmark_client::prelude::*;
//!
//! let config = Config::new();
//! let auth = StaticTokenProvider::new("user-1", "id-token");
//! let client = BookmarkClient::new(config, auth);
//!
//! let saved = client.save_bookmark(12.5, 77.3, "cafe", "Joe's").await?;
//! let all = client.get_bookmarks().await?;
//! ```

/// Application layer: models, service interfaces, and service implementations
pub mod application;
/// High-level client facade wiring config, auth, and transport together
pub mod client;
/// Environment-driven configuration
pub mod config;
/// Crate-wide constants (endpoint paths, defaults)
pub mod constants;
/// Error types for all fallible operations
pub mod error;
/// Commonly used types and traits, re-exported
pub mod prelude;
/// Signed-in identity and bearer-token handling
pub mod session;
/// HTTP transport layer
pub mod transport;
/// Utility helpers (env parsing, logging)
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string
pub fn version() -> &'static str {
    VERSION
}
