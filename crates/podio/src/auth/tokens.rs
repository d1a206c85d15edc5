//! Access token and cached authentication state.

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;

/// An access token for authenticated item requests.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the value of the `Authorization` header for this token.
    pub(crate) fn authorization(&self) -> String {
        format!("OAuth2 {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// The cached result of the last successful authentication.
///
/// The token is usable only while `now - issued_at < expires_in`.
#[derive(Debug, Clone)]
pub(crate) struct AuthSession {
    access_token: AccessToken,
    expires_in: u64,
    issued_at: Instant,
}

impl AuthSession {
    pub(crate) fn new(access_token: AccessToken, expires_in: u64, issued_at: Instant) -> Self {
        Self {
            access_token,
            expires_in,
            issued_at,
        }
    }

    pub(crate) fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    pub(crate) fn expires_in(&self) -> u64 {
        self.expires_in
    }

    /// Returns true once `expires_in` seconds have elapsed since issue.
    pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.issued_at);
        Duration::from_secs(self.expires_in) <= elapsed
    }

    pub(crate) fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Time left before the token expires, zero if already expired.
    pub(crate) fn remaining_at(&self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.issued_at);
        Duration::from_secs(self.expires_in).saturating_sub(elapsed)
    }
}
