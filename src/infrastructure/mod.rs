pub mod account_repository;
pub mod argon2_credential_hasher;
pub mod memory_document_store;
pub mod mongo_document_store;
pub mod uuid_token_issuer;
