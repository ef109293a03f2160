use async_trait::async_trait;
use bson::{Bson, Document};
use chrono::{Duration, Utc};

use crate::{
    config::StoreConfig,
    domain::{
        error::{AdapterError, StoreError},
        models::account::{Account, keys},
        repositories::{
            account_repository::{AccountQuery, AccountRepository},
            document_store::{DocumentStore, FieldFilter},
        },
        services::{credential_service::CredentialHasher, token_service::TokenIssuer},
    },
};

/// Account store adapter backed by a generic document store.
///
/// Composes the credential hasher and token issuer with an established
/// store session injected at construction. `save`'s insert-then-refetch is
/// two independent round trips: a concurrent `remove` landing between them
/// makes the refetch miss and `save` returns `AdapterError::NotFound` even
/// though the insert succeeded. Callers must tolerate this race.
#[derive(Clone)]
pub struct DocumentAccountRepository<S, H, T>
where
    S: DocumentStore,
    H: CredentialHasher,
    T: TokenIssuer,
{
    store: S,
    hasher: H,
    issuer: T,
    collection: String,
    signup_token_lifetime: Duration,
}

impl<S, H, T> DocumentAccountRepository<S, H, T>
where
    S: DocumentStore,
    H: CredentialHasher,
    T: TokenIssuer,
{
    /// Build the adapter over an established store session. The lifetime
    /// was validated when `config` was constructed.
    pub fn new(store: S, hasher: H, issuer: T, config: &StoreConfig) -> Self {
        Self {
            store,
            hasher,
            issuer,
            collection: config.collection().to_string(),
            signup_token_lifetime: config.signup_token_lifetime(),
        }
    }

    fn query_filters(query: &AccountQuery) -> Vec<FieldFilter> {
        let mut filters = vec![FieldFilter::eq(query.field().as_key(), query.value())];
        if let Some(at) = query.valid_token_at() {
            filters.push(FieldFilter::gt(
                keys::SIGNUP_TOKEN_EXPIRES,
                Bson::DateTime(at.into()),
            ));
        }
        filters
    }

    fn encode(account: &Account) -> Result<Document, AdapterError> {
        bson::to_document(account)
            .map_err(|e| StoreError::Operation(format!("encode failed: {e}")).into())
    }

    fn decode(document: Document) -> Result<Account, AdapterError> {
        bson::from_document(document)
            .map_err(|e| StoreError::Operation(format!("decode failed: {e}")).into())
    }
}

#[async_trait]
impl<S, H, T> AccountRepository for DocumentAccountRepository<S, H, T>
where
    S: DocumentStore,
    H: CredentialHasher,
    T: TokenIssuer,
{
    async fn save(&self, name: &str, email: &str, secret: &str) -> Result<Account, AdapterError> {
        let token = self.issuer.issue(Utc::now(), self.signup_token_lifetime)?;
        let credential = self.hasher.hash(secret)?;
        let draft = Account::draft(name, email, &token, &credential);

        self.store
            .insert_one(&self.collection, Self::encode(&draft)?)
            .await?;

        // Return the canonical stored copy, id included.
        let query = AccountQuery::by_signup_token(token.token());
        self.find(&query).await?.ok_or(AdapterError::NotFound)
    }

    async fn find(&self, query: &AccountQuery) -> Result<Option<Account>, AdapterError> {
        let filters = Self::query_filters(query);
        match self.store.find_one(&self.collection, &filters).await? {
            Some(document) => Ok(Some(Self::decode(document)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, account: Account) -> Result<Account, AdapterError> {
        let id = account.id().ok_or(AdapterError::MissingId)?;

        let mut fields = Self::encode(&account)?;
        fields.remove(keys::ID);

        let filters = [FieldFilter::eq(keys::ID, Bson::ObjectId(id))];
        let matched = self
            .store
            .update_one(&self.collection, &filters, fields)
            .await?;
        if matched == 0 {
            return Err(AdapterError::NotFound);
        }
        Ok(account)
    }

    async fn remove(&self, name: &str) -> Result<(), AdapterError> {
        let filters = [FieldFilter::eq(keys::NAME, name)];
        let deleted = self.store.delete_one(&self.collection, &filters).await?;
        if deleted == 0 {
            return Err(AdapterError::NotFound);
        }
        Ok(())
    }
}
