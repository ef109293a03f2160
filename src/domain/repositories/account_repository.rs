use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    error::AdapterError,
    models::account::{Account, keys},
};

/// The unique lookup keys an account can be retrieved by. Closed on
/// purpose: filters are only ever built from these variants, so no caller
/// can steer a query at an arbitrary document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupField {
    Name,
    Email,
    SignupToken,
}

impl LookupField {
    pub(crate) fn as_key(self) -> &'static str {
        match self {
            Self::Name => keys::NAME,
            Self::Email => keys::EMAIL,
            Self::SignupToken => keys::SIGNUP_TOKEN,
        }
    }
}

/// A single-account lookup: one unique key, its value, and an optional
/// bound restricting the match to accounts whose signup token is still
/// valid (strictly unexpired) at the given instant.
#[derive(Debug, Clone)]
pub struct AccountQuery {
    field: LookupField,
    value: String,
    valid_token_at: Option<DateTime<Utc>>,
}

impl AccountQuery {
    pub fn new(field: LookupField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            valid_token_at: None,
        }
    }

    pub fn by_name(value: impl Into<String>) -> Self {
        Self::new(LookupField::Name, value)
    }

    pub fn by_email(value: impl Into<String>) -> Self {
        Self::new(LookupField::Email, value)
    }

    pub fn by_signup_token(value: impl Into<String>) -> Self {
        Self::new(LookupField::SignupToken, value)
    }

    /// Scope the lookup to accounts whose `signup_token_expires` lies
    /// strictly after `at`.
    pub fn with_valid_token_at(mut self, at: DateTime<Utc>) -> Self {
        self.valid_token_at = Some(at);
        self
    }

    pub fn field(&self) -> LookupField {
        self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn valid_token_at(&self) -> Option<DateTime<Utc>> {
        self.valid_token_at
    }
}

/// The storage contract consumed by the authentication library.
///
/// Every operation is an independent unit of work completing exactly once
/// with a result or an error; no retries, caching, or cross-call locking
/// happen here.
#[async_trait]
pub trait AccountRepository {
    /// Create an account: issue a signup token, hash the secret, insert
    /// the record, then re-read the stored copy by its token so the caller
    /// observes exactly what persisted, including the store-assigned id.
    async fn save(&self, name: &str, email: &str, secret: &str) -> Result<Account, AdapterError>;

    /// Look up a single account. A miss is `Ok(None)`, distinct from a
    /// store error.
    async fn find(&self, query: &AccountQuery) -> Result<Option<Account>, AdapterError>;

    /// Overwrite the stored document's fields with the fields of the given
    /// account (per-field set, not a full-document replace). Returns the
    /// supplied account, not a re-fetched copy. Zero matched documents is
    /// `AdapterError::NotFound`.
    async fn update(&self, account: Account) -> Result<Account, AdapterError>;

    /// Delete the single account with the given name. Zero deletions is
    /// `AdapterError::NotFound`, distinct from a store failure.
    async fn remove(&self, name: &str) -> Result<(), AdapterError>;
}
