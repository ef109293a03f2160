use argon2::{
    Argon2, PasswordHash as Argon2Hash,
    password_hash::{PasswordHasher as Argon2Hasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::domain::{
    error::AdapterError, models::credential::HashedCredential,
    services::credential_service::CredentialHasher,
};

/// Argon2-backed credential hasher. A fresh random salt is generated on
/// every call; the derived key is the PHC hash string.
#[derive(Clone)]
pub struct Argon2CredentialHasher;

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, secret: &str) -> Result<HashedCredential, AdapterError> {
        let salt = SaltString::generate(OsRng);
        let argon2 = Argon2::default();

        let derived_key = argon2
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| AdapterError::Hashing(e.to_string()))?
            .to_string();

        Ok(HashedCredential::new(salt.as_str().to_string(), derived_key))
    }

    fn verify(
        &self,
        secret: &str,
        credential: &HashedCredential,
    ) -> Result<bool, AdapterError> {
        let parsed_hash = Argon2Hash::new(credential.derived_key())
            .map_err(|e| AdapterError::Hashing(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(secret.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
