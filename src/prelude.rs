//! # Bookmark Client Prelude
//!
//! Convenient single import for the most commonly used types and traits.
//!
//! ## Usage
//!
//! ```rust
//! use bookmark_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8000");
//! let auth = StaticTokenProvider::new("user-1", "id-token");
//! let client = BookmarkClient::new(config, auth);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the bookmark client
pub use crate::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, Operation};

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Authentication provider interface and token types
pub use crate::session::interface::{
    AuthProvider, IdentityToken, StaticTokenProvider, UserIdentity,
};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// High-level client facade
pub use crate::client::BookmarkClient;

/// Bookmark service interface and implementation
pub use crate::application::interfaces::bookmarks::BookmarkService;
pub use crate::application::services::bookmark_service::BookmarkServiceImpl;

/// HTTP transport interface and default implementation
pub use crate::transport::http_client::{BookmarkHttpClient, BookmarkHttpClientImpl};

// ============================================================================
// MODELS
// ============================================================================

/// Bookmark request and response models
pub use crate::application::models::bookmark::{
    Bookmark, BookmarkCountResponse, CreateBookmarkRequest, DeleteBookmarkResponse,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Environment variable helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

/// Logging setup
pub use crate::utils::logger::setup_logger;
