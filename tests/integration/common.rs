// Common utilities for integration tests

use bookmark_client::prelude::*;

/// Creates a client against the live backend configured in the environment
///
/// Returns `None` when `BACKEND_URL` or `BACKEND_TEST_TOKEN` is not set, so
/// tests can skip instead of failing in environments without a backend.
pub fn create_live_client() -> Option<BookmarkClient<StaticTokenProvider>> {
    setup_logger();

    let base_url: Option<String> = get_env_or_none("BACKEND_URL");
    let token: Option<String> = get_env_or_none("BACKEND_TEST_TOKEN");
    let uid = get_env_or_default("BACKEND_TEST_UID", String::from("integration-user"));

    match (base_url, token) {
        (Some(url), Some(token)) => Some(BookmarkClient::new(
            Config::with_base_url(&url),
            StaticTokenProvider::new(&uid, &token),
        )),
        _ => None,
    }
}
