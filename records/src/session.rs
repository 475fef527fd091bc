//! Bearer-token access.
//!
//! The token is issued and refreshed elsewhere; this side only reads it. Each
//! request asks its [`TokenSource`] again instead of caching a value at load
//! time, so a token written after the page loaded is picked up.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::ApiFailure;

/// `localStorage` key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw stored value; blank values are treated as absent.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Supplies the current token to each outgoing request.
pub trait TokenSource {
    fn access_token(&self) -> Option<SessionToken>;

    /// # Errors
    ///
    /// Returns [`ApiFailure::MissingToken`] when no token is stored.
    fn require_token(&self) -> Result<SessionToken, ApiFailure> {
        self.access_token().ok_or(ApiFailure::MissingToken)
    }
}

/// A token fixed at construction, for non-browser callers.
#[derive(Clone, Debug, Default)]
pub struct StaticToken(Option<SessionToken>);

impl StaticToken {
    #[must_use]
    pub fn new(raw: Option<String>) -> Self {
        Self(raw.and_then(SessionToken::new))
    }
}

impl TokenSource for StaticToken {
    fn access_token(&self) -> Option<SessionToken> {
        self.0.clone()
    }
}
