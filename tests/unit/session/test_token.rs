use bookmark_client::error::AppError;
use bookmark_client::session::interface::{AuthProvider, IdentityToken, StaticTokenProvider};
use chrono::{Duration, Utc};
use tokio_test::block_on;

#[test]
fn test_token_exposes_secret() {
    let token = IdentityToken::new("raw-token");
    assert_eq!(token.secret(), "raw-token");
}

#[test]
fn test_token_debug_redacts_secret() {
    let token = IdentityToken::new("super-secret-value");
    let debug = format!("{token:?}");
    assert!(!debug.contains("super-secret-value"));
    assert!(debug.contains("***"));
}

#[test]
fn test_token_without_expiry_never_expires() {
    let token = IdentityToken::new("tok");
    assert!(!token.is_expired_w_margin(Duration::hours(1000)));
    assert!(!token.is_expiring());
}

#[test]
fn test_token_expired_in_the_past() {
    let token = IdentityToken::with_expiry("tok", Utc::now() - Duration::minutes(1));
    assert!(token.is_expired_w_margin(Duration::zero()));
}

#[test]
fn test_token_near_expiry_within_margin() {
    // Expires in 2 minutes, margin is 5 minutes
    let token = IdentityToken::with_expiry("tok", Utc::now() + Duration::minutes(2));
    assert!(token.is_expired_w_margin(Duration::minutes(5)));
    assert!(token.is_expiring());
}

#[test]
fn test_token_far_from_expiry_outside_margin() {
    let token = IdentityToken::with_expiry("tok", Utc::now() + Duration::hours(1));
    assert!(!token.is_expired_w_margin(Duration::minutes(5)));
    assert!(!token.is_expiring());
}

#[test]
fn test_static_provider_reports_signed_in_user() {
    let provider = StaticTokenProvider::new("user-1", "tok");
    let user = provider.current_user().expect("should be signed in");
    assert_eq!(user.uid, "user-1");
    assert!(user.email.is_none());

    let token = block_on(provider.id_token()).expect("should issue token");
    assert_eq!(token.secret(), "tok");
}

#[test]
fn test_signed_out_provider_has_no_user() {
    let provider = StaticTokenProvider::signed_out();
    assert!(provider.current_user().is_none());

    let err = block_on(provider.id_token()).expect_err("should fail signed out");
    match err {
        AppError::NotAuthenticated => (),
        other => panic!("Unexpected error: {other:?}"),
    }
}
