//! Token source backed by `localStorage["accessToken"]`.

use records::{ACCESS_TOKEN_KEY, SessionToken, TokenSource};

use super::storage::load_string;

/// Reads the stored token on every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl TokenSource for BrowserSession {
    fn access_token(&self) -> Option<SessionToken> {
        load_string(ACCESS_TOKEN_KEY).and_then(SessionToken::new)
    }
}
