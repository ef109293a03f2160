use chrono::Duration;

use crate::domain::error::AdapterError;

/// Connection descriptor and token policy for the account store.
///
/// Validated on construction; a config that parses is a config the adapter
/// can be built from.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    uri: String,
    database: String,
    collection: String,
    signup_token_lifetime: Duration,
}

impl StoreConfig {
    pub fn new(
        uri: impl Into<String>,
        database: impl Into<String>,
        collection: impl Into<String>,
        signup_token_lifetime: Duration,
    ) -> Result<Self, AdapterError> {
        let uri = uri.into();
        let database = database.into();
        let collection = collection.into();

        if uri.is_empty() {
            return Err(AdapterError::Configuration(
                "store uri must not be empty".to_string(),
            ));
        }
        if database.is_empty() {
            return Err(AdapterError::Configuration(
                "database name must not be empty".to_string(),
            ));
        }
        if collection.is_empty() {
            return Err(AdapterError::Configuration(
                "collection name must not be empty".to_string(),
            ));
        }
        if signup_token_lifetime <= Duration::zero() {
            return Err(AdapterError::Configuration(
                "signup token lifetime must be positive".to_string(),
            ));
        }

        Ok(Self {
            uri,
            database,
            collection,
            signup_token_lifetime,
        })
    }

    /// Read the configuration from the environment, `.env` aware.
    pub fn from_env() -> Result<Self, AdapterError> {
        let _ = dotenvy::dotenv();

        let uri = env_var("ACCOUNT_STORE_URI")?;
        let database = env_var("ACCOUNT_STORE_DB")?;
        let collection = env_var("ACCOUNT_STORE_COLLECTION")?;
        let hours: i64 = env_var("SIGNUP_TOKEN_LIFETIME_HOURS")?
            .parse()
            .map_err(|e| {
                AdapterError::Configuration(format!("SIGNUP_TOKEN_LIFETIME_HOURS: {e}"))
            })?;

        Self::new(uri, database, collection, Duration::hours(hours))
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn signup_token_lifetime(&self) -> Duration {
        self.signup_token_lifetime
    }
}

fn env_var(name: &str) -> Result<String, AdapterError> {
    dotenvy::var(name).map_err(|e| AdapterError::Configuration(format!("{name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_positive_lifetime() {
        let config = StoreConfig::new(
            "mongodb://localhost:27017",
            "auth",
            "accounts",
            Duration::hours(24),
        )
        .unwrap();
        assert_eq!(config.collection(), "accounts");
        assert_eq!(config.signup_token_lifetime(), Duration::hours(24));
    }

    #[test]
    fn rejects_zero_and_negative_lifetimes() {
        for lifetime in [Duration::zero(), Duration::hours(-1)] {
            let result = StoreConfig::new("mongodb://localhost", "auth", "accounts", lifetime);
            assert!(matches!(result, Err(AdapterError::Configuration(_))));
        }
    }

    #[test]
    fn rejects_an_empty_descriptor_part() {
        let result = StoreConfig::new("", "auth", "accounts", Duration::hours(1));
        assert!(matches!(result, Err(AdapterError::Configuration(_))));
    }
}
