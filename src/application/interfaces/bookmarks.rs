use crate::application::models::bookmark::{Bookmark, DeleteBookmarkResponse};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the bookmark service
///
/// Every operation checks the same preconditions in order before touching
/// the network: a signed-in identity (else `NotAuthenticated`), then a
/// configured backend URL (else `ConfigurationMissing`). A passing call
/// issues exactly one HTTP request.
#[async_trait]
pub trait BookmarkService: Send + Sync {
    /// Saves a new bookmark
    ///
    /// Values are passed through verbatim; the backend is the sole
    /// validator of coordinates and strings.
    ///
    /// # Arguments
    /// * `lat` - Latitude in degrees
    /// * `lon` - Longitude in degrees
    /// * `kind` - Category tag, e.g. "cafe"
    /// * `name` - Display name
    ///
    /// # Returns
    /// * The created bookmark, as defined by the backend
    async fn save_bookmark(
        &self,
        lat: f64,
        lon: f64,
        kind: &str,
        name: &str,
    ) -> Result<Bookmark, AppError>;

    /// Lists all bookmarks of the signed-in user
    async fn get_bookmarks(&self) -> Result<Vec<Bookmark>, AppError>;

    /// Deletes a bookmark by its backend-issued identifier
    ///
    /// The identifier is interpolated directly into the request path; no
    /// escaping is performed.
    async fn delete_bookmark(&self, bookmark_id: &str)
    -> Result<DeleteBookmarkResponse, AppError>;

    /// Gets the number of bookmarks the signed-in user currently has
    async fn get_bookmark_count(&self) -> Result<u64, AppError>;
}
