/// Endpoint path for creating and listing bookmarks, relative to the base URL
pub const BOOKMARKS_ENDPOINT: &str = "api/v1/user/bookmarks";
/// Endpoint path for the bookmark count, relative to the base URL
pub const BOOKMARK_COUNT_ENDPOINT: &str = "api/v1/user/bookmarks/count";
/// Default timeout in seconds for REST requests when not set in the environment
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the backend
pub const USER_AGENT: &str = "bookmark-client/0.1.0";
/// Margin in seconds within which providers should treat an identity token as
/// expiring and fetch a fresh one before issuing a request
pub const TOKEN_EXPIRY_MARGIN_SECONDS: i64 = 300;
