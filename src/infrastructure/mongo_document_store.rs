use async_trait::async_trait;
use bson::{Bson, Document, doc};
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

use crate::{
    config::StoreConfig,
    domain::{
        error::StoreError,
        repositories::document_store::{DocumentStore, FieldFilter, FilterOp},
    },
};

/// MongoDB-backed document store.
///
/// Wraps an established `Database` handle and resolves collections per
/// call. Timeouts and retry behavior are whatever the driver session was
/// configured with; nothing is added here.
#[derive(Debug, Clone)]
pub struct MongoDocumentStore {
    db: Database,
}

impl MongoDocumentStore {
    /// Create a store from an existing database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Connect to the configured deployment. The store is not usable
    /// before this completes.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(config.uri())
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        let db = client.database(config.database());
        info!(database = config.database(), "connected to document store");
        Ok(Self { db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

fn build_filter(filters: &[FieldFilter]) -> Document {
    let mut filter = Document::new();
    for f in filters {
        match f.op {
            FilterOp::Eq => {
                filter.insert(f.field.clone(), f.value.clone());
            }
            FilterOp::Gt => {
                filter.insert(f.field.clone(), doc! { "$gt": f.value.clone() });
            }
        }
    }
    filter
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, StoreError> {
        let result = self
            .collection(collection)
            .insert_one(document)
            .await
            .map_err(|e| StoreError::Operation(format!("insert failed: {e}")))?;
        debug!(collection, "inserted one document");
        Ok(result.inserted_id)
    }

    async fn find_one(
        &self,
        collection: &str,
        filters: &[FieldFilter],
    ) -> Result<Option<Document>, StoreError> {
        self.collection(collection)
            .find_one(build_filter(filters))
            .await
            .map_err(|e| StoreError::Operation(format!("find failed: {e}")))
    }

    async fn update_one(
        &self,
        collection: &str,
        filters: &[FieldFilter],
        set: Document,
    ) -> Result<u64, StoreError> {
        let result = self
            .collection(collection)
            .update_one(build_filter(filters), doc! { "$set": set })
            .await
            .map_err(|e| StoreError::Operation(format!("update failed: {e}")))?;
        Ok(result.matched_count)
    }

    async fn delete_one(
        &self,
        collection: &str,
        filters: &[FieldFilter],
    ) -> Result<u64, StoreError> {
        let result = self
            .collection(collection)
            .delete_one(build_filter(filters))
            .await
            .map_err(|e| StoreError::Operation(format!("delete failed: {e}")))?;
        Ok(result.deleted_count)
    }
}
