pub mod account_repository;
pub mod document_store;
