use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};
use tokio::sync::RwLock;

use crate::domain::{
    error::StoreError,
    repositories::document_store::{DocumentStore, FieldFilter, FilterOp},
};

type Collections = HashMap<String, Vec<Document>>;

/// In-memory document store backed by a `HashMap` keyed by collection
/// name. Data is lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<Collections>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in a collection.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(|documents| documents.len())
            .unwrap_or(0)
    }
}

fn matches(document: &Document, filters: &[FieldFilter]) -> bool {
    filters.iter().all(|f| {
        let Some(value) = document.get(&f.field) else {
            return false;
        };
        match f.op {
            FilterOp::Eq => value == &f.value,
            FilterOp::Gt => greater_than(value, &f.value),
        }
    })
}

fn greater_than(value: &Bson, bound: &Bson) -> bool {
    match (value, bound) {
        (Bson::DateTime(a), Bson::DateTime(b)) => a > b,
        (Bson::Int32(a), Bson::Int32(b)) => a > b,
        (Bson::Int64(a), Bson::Int64(b)) => a > b,
        (Bson::Double(a), Bson::Double(b)) => a > b,
        _ => false,
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<Bson, StoreError> {
        let id = document
            .get("_id")
            .cloned()
            .unwrap_or_else(|| Bson::ObjectId(ObjectId::new()));
        document.insert("_id", id.clone());

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id)
    }

    async fn find_one(
        &self,
        collection: &str,
        filters: &[FieldFilter],
    ) -> Result<Option<Document>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|documents| documents.iter().find(|d| matches(d, filters)).cloned()))
    }

    async fn update_one(
        &self,
        collection: &str,
        filters: &[FieldFilter],
        set: Document,
    ) -> Result<u64, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };
        let Some(document) = documents.iter_mut().find(|d| matches(d, filters)) else {
            return Ok(0);
        };

        for (key, value) in set {
            document.insert(key, value);
        }
        Ok(1)
    }

    async fn delete_one(
        &self,
        collection: &str,
        filters: &[FieldFilter],
    ) -> Result<u64, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };
        match documents.iter().position(|d| matches(d, filters)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
