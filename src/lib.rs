//! Persistence adapter providing the account storage contract for an
//! authentication library: salted one-way credential hashing, time-bounded
//! signup tokens, and create/find/update/delete over a generic document
//! store.

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::StoreConfig;
pub use domain::error::{AdapterError, StoreError};
pub use domain::models::account::Account;
pub use domain::models::credential::HashedCredential;
pub use domain::repositories::account_repository::{AccountQuery, AccountRepository, LookupField};
pub use domain::repositories::document_store::{DocumentStore, FieldFilter, FilterOp};
pub use domain::services::credential_service::CredentialHasher;
pub use domain::services::token_service::{IssuedToken, TokenIssuer};
pub use infrastructure::account_repository::DocumentAccountRepository;
pub use infrastructure::argon2_credential_hasher::Argon2CredentialHasher;
pub use infrastructure::memory_document_store::MemoryDocumentStore;
pub use infrastructure::mongo_document_store::MongoDocumentStore;
pub use infrastructure::uuid_token_issuer::UuidTokenIssuer;
