use crate::application::interfaces::bookmarks::BookmarkService;
use crate::{
    application::models::bookmark::{
        Bookmark, BookmarkCountResponse, CreateBookmarkRequest, DeleteBookmarkResponse,
    },
    config::Config,
    constants::{BOOKMARK_COUNT_ENDPOINT, BOOKMARKS_ENDPOINT},
    error::{AppError, Operation},
    session::interface::{AuthProvider, UserIdentity},
    transport::http_client::BookmarkHttpClient,
};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the bookmark service
///
/// Generic over the transport and the authentication provider so both can
/// be substituted in tests.
pub struct BookmarkServiceImpl<T: BookmarkHttpClient, A: AuthProvider> {
    config: Arc<Config>,
    client: Arc<T>,
    auth: Arc<A>,
}

impl<T: BookmarkHttpClient, A: AuthProvider> BookmarkServiceImpl<T, A> {
    /// Creates a new instance of the bookmark service
    pub fn new(config: Arc<Config>, client: Arc<T>, auth: Arc<A>) -> Self {
        Self {
            config,
            client,
            auth,
        }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Checks the shared preconditions, in order: signed-in identity first,
    /// configured backend URL second. No request is issued when either fails.
    fn ensure_ready(&self) -> Result<UserIdentity, AppError> {
        let user = self.auth.current_user().ok_or(AppError::NotAuthenticated)?;
        if !self.config.is_configured() {
            return Err(AppError::ConfigurationMissing);
        }
        Ok(user)
    }
}

#[async_trait]
impl<T: BookmarkHttpClient + 'static, A: AuthProvider + 'static> BookmarkService
    for BookmarkServiceImpl<T, A>
{
    async fn save_bookmark(
        &self,
        lat: f64,
        lon: f64,
        kind: &str,
        name: &str,
    ) -> Result<Bookmark, AppError> {
        let user = self.ensure_ready()?;
        debug!("saving bookmark for user {}", user.uid);

        let token = self.auth.id_token().await?;
        let body = CreateBookmarkRequest {
            lat,
            lon,
            kind: kind.to_string(),
            name: Some(name.to_string()),
        };

        let bookmark: Bookmark = self
            .client
            .request(
                Method::POST,
                BOOKMARKS_ENDPOINT,
                &token,
                Some(&body),
                Operation::Save,
            )
            .await?;

        info!("bookmark {} saved", bookmark.id);
        Ok(bookmark)
    }

    async fn get_bookmarks(&self) -> Result<Vec<Bookmark>, AppError> {
        let user = self.ensure_ready()?;
        debug!("fetching bookmarks for user {}", user.uid);

        let token = self.auth.id_token().await?;

        let bookmarks: Vec<Bookmark> = self
            .client
            .request::<(), _>(Method::GET, BOOKMARKS_ENDPOINT, &token, None, Operation::Get)
            .await?;

        debug!("{} bookmarks returned", bookmarks.len());
        Ok(bookmarks)
    }

    async fn delete_bookmark(
        &self,
        bookmark_id: &str,
    ) -> Result<DeleteBookmarkResponse, AppError> {
        let user = self.ensure_ready()?;
        debug!("deleting bookmark {} for user {}", bookmark_id, user.uid);

        let token = self.auth.id_token().await?;
        let path = format!("{BOOKMARKS_ENDPOINT}/{bookmark_id}");

        let confirmation: DeleteBookmarkResponse = self
            .client
            .request::<(), _>(Method::DELETE, &path, &token, None, Operation::Delete)
            .await?;

        info!("bookmark {} deleted", bookmark_id);
        Ok(confirmation)
    }

    async fn get_bookmark_count(&self) -> Result<u64, AppError> {
        let user = self.ensure_ready()?;
        debug!("counting bookmarks for user {}", user.uid);

        let token = self.auth.id_token().await?;

        let response: BookmarkCountResponse = self
            .client
            .request::<(), _>(
                Method::GET,
                BOOKMARK_COUNT_ENDPOINT,
                &token,
                None,
                Operation::Count,
            )
            .await?;

        debug!("bookmark count: {}", response.count);
        Ok(response.count)
    }
}
