use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::credential::HashedCredential;
use crate::domain::services::token_service::IssuedToken;

/// Document field names used when building store filters.
pub(crate) mod keys {
    pub const ID: &str = "_id";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const SIGNUP_TOKEN: &str = "signupToken";
    pub const SIGNUP_TOKEN_EXPIRES: &str = "signupTokenExpires";
}

/// A persisted user credential record with verification-token metadata.
///
/// The `id` is assigned by the store on insert and is never synthesized
/// here; a freshly drafted account carries `None` until the stored copy is
/// read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    signup_token: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    signup_timestamp: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    signup_token_expires: DateTime<Utc>,
    failed_login_attempts: i64,
    salt: String,
    derived_key: String,
}

impl Account {
    /// Build the draft record inserted at signup.
    pub fn draft(
        name: &str,
        email: &str,
        token: &IssuedToken,
        credential: &HashedCredential,
    ) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            signup_token: token.token().to_string(),
            signup_timestamp: token.issued_at(),
            signup_token_expires: token.expires_at(),
            failed_login_attempts: 0,
            salt: credential.salt().to_string(),
            derived_key: credential.derived_key().to_string(),
        }
    }

    pub fn id(&self) -> Option<ObjectId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn signup_token(&self) -> &str {
        &self.signup_token
    }

    pub fn signup_timestamp(&self) -> DateTime<Utc> {
        self.signup_timestamp
    }

    pub fn signup_token_expires(&self) -> DateTime<Utc> {
        self.signup_token_expires
    }

    pub fn failed_login_attempts(&self) -> i64 {
        self.failed_login_attempts
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn derived_key(&self) -> &str {
        &self.derived_key
    }

    /// The stored credential, for verification against a login attempt.
    pub fn hashed_credential(&self) -> HashedCredential {
        HashedCredential::new(self.salt.clone(), self.derived_key.clone())
    }

    pub fn set_failed_login_attempts(&mut self, attempts: i64) {
        self.failed_login_attempts = attempts;
    }

    pub fn record_failed_login(&mut self) {
        self.failed_login_attempts += 1;
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn sample() -> Account {
        let now = Utc::now();
        let token = IssuedToken::new("tok".to_string(), now, now + Duration::hours(1));
        let credential = HashedCredential::new("salt".to_string(), "key".to_string());
        Account::draft("john", "john@x.com", &token, &credential)
    }

    #[test]
    fn draft_starts_without_id_and_with_zeroed_counter() {
        let account = sample();
        assert!(account.id().is_none());
        assert_eq!(account.failed_login_attempts(), 0);
        assert_eq!(account.signup_token(), "tok");
    }

    #[test]
    fn failed_login_counter_mutators() {
        let mut account = sample();
        account.record_failed_login();
        account.record_failed_login();
        assert_eq!(account.failed_login_attempts(), 2);
        account.set_failed_login_attempts(0);
        assert_eq!(account.failed_login_attempts(), 0);
    }
}
