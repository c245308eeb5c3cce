//! Simplified client for the bookmarks backend
//!
//! Wires the configuration, an authentication provider, and the default
//! reqwest transport into one value exposing the four bookmark operations.
//!
//! # Example
//! ```ignore
//! use bookmark_client::client::BookmarkClient;
//! use bookmark_client::config::Config;
//! use bookmark_client::session::interface::StaticTokenProvider;
//!
//! let config = Config::new();
//! let auth = StaticTokenProvider::new("user-1", "id-token");
//! let client = BookmarkClient::new(config, auth);
//!
//! let bookmarks = client.get_bookmarks().await?;
//! ```

use crate::application::interfaces::bookmarks::BookmarkService;
use crate::application::models::bookmark::{Bookmark, DeleteBookmarkResponse};
use crate::application::services::bookmark_service::BookmarkServiceImpl;
use crate::config::Config;
use crate::error::AppError;
use crate::session::interface::AuthProvider;
use crate::transport::http_client::BookmarkHttpClientImpl;
use std::sync::Arc;

/// High-level client for the bookmarks backend
///
/// Each operation verifies the signed-in identity and the configured
/// backend URL, obtains a fresh bearer token from the provider, and issues
/// a single HTTP request. Failures are returned, never retried.
pub struct BookmarkClient<A: AuthProvider> {
    service: BookmarkServiceImpl<BookmarkHttpClientImpl, A>,
}

impl<A: AuthProvider + 'static> BookmarkClient<A> {
    /// Creates a new client from a configuration and an auth provider
    ///
    /// # Arguments
    /// * `config` - Configuration carrying the backend base URL
    /// * `auth` - Authentication provider for the signed-in user
    pub fn new(config: Config, auth: A) -> Self {
        let config = Arc::new(config);
        let transport = Arc::new(BookmarkHttpClientImpl::new(config.clone()));
        let service = BookmarkServiceImpl::new(config, transport, Arc::new(auth));

        Self { service }
    }

    /// Saves a new bookmark and returns it as created by the backend
    pub async fn save_bookmark(
        &self,
        lat: f64,
        lon: f64,
        kind: &str,
        name: &str,
    ) -> Result<Bookmark, AppError> {
        self.service.save_bookmark(lat, lon, kind, name).await
    }

    /// Lists all bookmarks of the signed-in user
    pub async fn get_bookmarks(&self) -> Result<Vec<Bookmark>, AppError> {
        self.service.get_bookmarks().await
    }

    /// Deletes a bookmark by its backend-issued identifier
    pub async fn delete_bookmark(
        &self,
        bookmark_id: &str,
    ) -> Result<DeleteBookmarkResponse, AppError> {
        self.service.delete_bookmark(bookmark_id).await
    }

    /// Gets the number of bookmarks the signed-in user currently has
    pub async fn get_bookmark_count(&self) -> Result<u64, AppError> {
        self.service.get_bookmark_count().await
    }

    /// Gets the configuration this client was built with
    pub fn config(&self) -> Arc<Config> {
        self.service.get_config()
    }
}
