use chrono::{DateTime, Duration, Utc};

use crate::domain::error::AdapterError;

/// A signup token together with the instant it was issued and the absolute
/// instant it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    token: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl IssuedToken {
    pub fn new(token: String, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token,
            issued_at,
            expires_at,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// Service issuing unique signup tokens bounded by a configured lifetime.
pub trait TokenIssuer: Clone + Send + Sync {
    /// Issue a token expiring exactly `lifetime` after `now`. A zero or
    /// negative lifetime is a configuration error, never clamped.
    fn issue(&self, now: DateTime<Utc>, lifetime: Duration) -> Result<IssuedToken, AdapterError>;
}
