use serde::{Deserialize, Serialize};

/// Value object holding the salted one-way hash of an account secret.
///
/// The plaintext secret never appears here; `derived_key` is the only
/// persisted form of the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedCredential {
    salt: String,
    derived_key: String,
}

impl HashedCredential {
    pub fn new(salt: String, derived_key: String) -> Self {
        Self { salt, derived_key }
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn derived_key(&self) -> &str {
        &self.derived_key
    }

    pub fn into_parts(self) -> (String, String) {
        (self.salt, self.derived_key)
    }
}
