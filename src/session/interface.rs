//! Authentication provider interface
//!
//! Token issuance and refresh belong to an external authentication provider.
//! This crate only consumes two capabilities: "who, if anyone, is currently
//! signed in" and "give me a current bearer token for that identity". Both
//! are modelled by [`AuthProvider`] so real providers and test doubles plug
//! in the same way.

use crate::constants::TOKEN_EXPIRY_MARGIN_SECONDS;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// The currently signed-in user, as reported by the authentication provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Stable user identifier assigned by the provider
    pub uid: String,
    /// Email address, when the provider exposes one
    pub email: Option<String>,
}

impl UserIdentity {
    /// Creates an identity with the given uid and no email
    pub fn new(uid: &str) -> Self {
        Self {
            uid: uid.to_string(),
            email: None,
        }
    }
}

/// Short-lived bearer credential for a signed-in user
///
/// The token value is opaque to this crate: it is attached to requests as-is
/// and never cached across calls. The optional expiry is metadata for
/// provider implementations that refresh tokens ahead of time.
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityToken {
    value: String,
    /// When the token stops being valid, if the provider knows
    pub expires_at: Option<DateTime<Utc>>,
}

impl IdentityToken {
    /// Creates a token with no expiry metadata
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            expires_at: None,
        }
    }

    /// Creates a token that expires at the given instant
    pub fn with_expiry(value: &str, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.to_string(),
            expires_at: Some(expires_at),
        }
    }

    /// Returns the raw token value for use as a bearer credential
    pub fn secret(&self) -> &str {
        &self.value
    }

    /// Checks whether the token is expired or will expire within `margin`
    ///
    /// Tokens without expiry metadata are never considered expired; the
    /// provider that issued them is responsible for their freshness.
    pub fn is_expired_w_margin(&self, margin: Duration) -> bool {
        match self.expires_at {
            Some(expiry) => expiry - margin <= Utc::now(),
            None => false,
        }
    }

    /// Checks expiry against the default refresh margin
    pub fn is_expiring(&self) -> bool {
        self.is_expired_w_margin(Duration::seconds(TOKEN_EXPIRY_MARGIN_SECONDS))
    }
}

// The token value is a credential; keep it out of logs.
impl fmt::Debug for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityToken")
            .field("value", &"***")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Interface to the external authentication provider
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Returns the currently signed-in identity, or `None` when signed out
    fn current_user(&self) -> Option<UserIdentity>;

    /// Obtains a current bearer token for the signed-in identity
    ///
    /// Providers may perform a network round trip here when their cached
    /// token is near expiry. Fails with [`AppError::NotAuthenticated`] when
    /// no identity is signed in.
    async fn id_token(&self) -> Result<IdentityToken, AppError>;
}

/// Provider that serves a fixed identity and token
///
/// Useful for tests and for callers that already hold a long-lived token.
/// [`StaticTokenProvider::signed_out`] builds one that simulates the
/// signed-out state.
pub struct StaticTokenProvider {
    user: Option<UserIdentity>,
    token: IdentityToken,
}

impl StaticTokenProvider {
    /// Creates a provider with a signed-in user and a fixed token
    pub fn new(uid: &str, token: &str) -> Self {
        Self {
            user: Some(UserIdentity::new(uid)),
            token: IdentityToken::new(token),
        }
    }

    /// Creates a provider that reports no signed-in user
    pub fn signed_out() -> Self {
        Self {
            user: None,
            token: IdentityToken::new(""),
        }
    }
}

#[async_trait]
impl AuthProvider for StaticTokenProvider {
    fn current_user(&self) -> Option<UserIdentity> {
        self.user.clone()
    }

    async fn id_token(&self) -> Result<IdentityToken, AppError> {
        if self.user.is_none() {
            return Err(AppError::NotAuthenticated);
        }
        Ok(self.token.clone())
    }
}
