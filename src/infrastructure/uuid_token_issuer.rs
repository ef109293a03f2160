use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::{
    error::AdapterError,
    services::token_service::{IssuedToken, TokenIssuer},
};

/// Issues v4 UUID signup tokens with an absolute expiry.
#[derive(Clone)]
pub struct UuidTokenIssuer;

impl UuidTokenIssuer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidTokenIssuer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenIssuer for UuidTokenIssuer {
    fn issue(&self, now: DateTime<Utc>, lifetime: Duration) -> Result<IssuedToken, AdapterError> {
        if lifetime <= Duration::zero() {
            return Err(AdapterError::Configuration(
                "signup token lifetime must be positive".to_string(),
            ));
        }

        Ok(IssuedToken::new(
            Uuid::new_v4().to_string(),
            now,
            now + lifetime,
        ))
    }
}
