use async_trait::async_trait;
use bson::{Bson, Document};

use crate::domain::error::StoreError;

/// Comparison operators understood by the document store port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gt,
}

/// A single condition on a document field. Filters are combined with AND.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    pub field: String,
    pub op: FilterOp,
    pub value: Bson,
}

impl FieldFilter {
    pub fn eq(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::Eq,
            value: value.into(),
        }
    }

    pub fn gt(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::Gt,
            value: value.into(),
        }
    }
}

/// Minimal document-store port consumed by the account repository.
///
/// Implementations wrap an already-established session; opening and
/// closing the connection is the composing application's responsibility.
/// Whatever timeout semantics the session exposes pass through unchanged.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document into the named collection, returning the
    /// store-assigned id.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, StoreError>;

    /// Find the single document matching all filters.
    async fn find_one(
        &self,
        collection: &str,
        filters: &[FieldFilter],
    ) -> Result<Option<Document>, StoreError>;

    /// Set the given fields on the single document matching all filters.
    /// Returns the number of matched documents.
    async fn update_one(
        &self,
        collection: &str,
        filters: &[FieldFilter],
        set: Document,
    ) -> Result<u64, StoreError>;

    /// Delete the single document matching all filters. Returns the number
    /// of deleted documents.
    async fn delete_one(&self, collection: &str, filters: &[FieldFilter])
    -> Result<u64, StoreError>;
}
