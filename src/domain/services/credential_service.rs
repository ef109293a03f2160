use crate::domain::{error::AdapterError, models::credential::HashedCredential};

/// Service for hashing and verifying account secrets.
pub trait CredentialHasher: Clone + Send + Sync {
    /// Hash a plaintext secret with a freshly generated salt. Two calls
    /// with the same secret never produce the same credential.
    fn hash(&self, secret: &str) -> Result<HashedCredential, AdapterError>;

    /// Verify a plaintext secret against a stored credential.
    fn verify(&self, secret: &str, credential: &HashedCredential)
    -> Result<bool, AdapterError>;
}
