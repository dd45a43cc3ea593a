//! Account creation command.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::{DocumentType, NameKey};
use document_store::{
    CollectionLocator, Document, DocumentStore, DocumentStoreExt, PartitionScope, QuerySpec,
};
use domain::{Account, map_document_to_account};
use serde::{Deserialize, Serialize};

use crate::error::HandlerError;
use crate::request::{Command, Handle, Request};

/// Command: register a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Requested display name; its normalized form becomes the name key.
    pub name: String,

    /// Contact email.
    pub email: Option<String>,

    /// Owner's first name.
    pub first_name: Option<String>,

    /// Owner's last name.
    pub last_name: Option<String>,
}

impl CreateAccount {
    /// Creates the command with only a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            first_name: None,
            last_name: None,
        }
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the owner's name.
    pub fn with_owner(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }
}

impl Request for CreateAccount {
    type Response = CreateAccountResponse;

    fn name() -> &'static str {
        "CreateAccount"
    }
}

impl Command for CreateAccount {}

/// Outcome of [`CreateAccount`].
///
/// Business validation failures (a blank name, a name key already taken)
/// are reported here as an unsuccessful response, not as handler errors;
/// those are reserved for infrastructure failure and corruption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountResponse {
    /// Whether the account was created.
    pub success: bool,

    /// Human-readable outcome description.
    pub message: String,

    /// The created account, present only on success.
    pub account: Option<Account>,
}

impl CreateAccountResponse {
    fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            account: None,
        }
    }

    fn created(account: Account) -> Self {
        Self {
            success: true,
            message: "account created".to_string(),
            account: Some(account),
        }
    }
}

/// Handler for [`CreateAccount`].
///
/// Validates the requested name, checks name-key uniqueness with the same
/// normalized key and parameterized lookup as the read path, then inserts
/// the new document into the account partition.
pub struct CreateAccountHandler<S> {
    store: Arc<S>,
    locator: CollectionLocator,
}

impl<S: DocumentStore> CreateAccountHandler<S> {
    /// Creates the handler with its store collaborator.
    pub fn new(store: Arc<S>, locator: CollectionLocator) -> Self {
        Self { store, locator }
    }
}

#[async_trait]
impl<S: DocumentStore> Handle<CreateAccount> for CreateAccountHandler<S> {
    async fn handle(&self, request: CreateAccount) -> Result<CreateAccountResponse, HandlerError> {
        let name = request.name.trim();
        let name_key = NameKey::normalize(name);
        if name_key.is_empty() {
            return Ok(CreateAccountResponse::rejected(
                "account name must contain at least one non-whitespace character",
            ));
        }

        let partition = PartitionScope::for_type(DocumentType::Account);

        let existing = self
            .store
            .query_first(
                &self.locator,
                QuerySpec::lookup_by_name_key(&name_key),
                partition,
            )
            .await
            .map_err(HandlerError::from_store)?;
        if existing.is_some() {
            tracing::debug!(key = %name_key, "account name already taken");
            return Ok(CreateAccountResponse::rejected(format!(
                "an account named `{name}` already exists"
            )));
        }

        let mut builder = Document::builder(DocumentType::Account)
            .field("name_key", name_key.as_str())
            .field("name", name)
            .field("created_at", Utc::now().to_rfc3339());
        if let Some(email) = &request.email {
            builder = builder.field("email", email.as_str());
        }
        if let Some(first_name) = &request.first_name {
            builder = builder.field("first_name", first_name.as_str());
        }
        if let Some(last_name) = &request.last_name {
            builder = builder.field("last_name", last_name.as_str());
        }

        let stored = self
            .store
            .insert_document(&self.locator, builder.build(), partition)
            .await
            .map_err(HandlerError::from_store)?;

        let account = map_document_to_account(&stored)?;
        tracing::info!(account_id = %account.id, key = %account.name_key, "account created");
        metrics::counter!("accounts_created").increment(1);

        Ok(CreateAccountResponse::created(account))
    }
}

#[cfg(test)]
mod tests {
    use document_store::InMemoryDocumentStore;

    use super::*;

    fn locator() -> CollectionLocator {
        CollectionLocator::new("core", "documents")
    }

    fn handler(store: Arc<InMemoryDocumentStore>) -> CreateAccountHandler<InMemoryDocumentStore> {
        CreateAccountHandler::new(store, locator())
    }

    #[tokio::test]
    async fn creates_an_account_with_a_normalized_key() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let handler = handler(store.clone());

        let command = CreateAccount::new("Test 1145")
            .with_email("test@email.example")
            .with_owner("John", "Smith");
        let response = handler.handle(command).await.unwrap();

        assert!(response.success);
        let account = response.account.unwrap();
        assert_eq!(account.name_key.as_str(), "test1145");
        assert_eq!(account.name, "Test 1145");
        assert_eq!(account.email.as_deref(), Some("test@email.example"));
        assert!(account.created_at.is_some());
        assert_eq!(store.document_count().await, 1);
    }

    #[tokio::test]
    async fn rejects_a_blank_name() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let handler = handler(store.clone());

        let response = handler.handle(CreateAccount::new("   \t ")).await.unwrap();

        assert!(!response.success);
        assert!(response.account.is_none());
        assert_eq!(store.document_count().await, 0);
    }

    #[tokio::test]
    async fn rejects_a_name_key_that_is_already_taken() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let handler = handler(store.clone());

        handler
            .handle(CreateAccount::new("Acme Corp"))
            .await
            .unwrap();
        let response = handler
            .handle(CreateAccount::new("ACME corp"))
            .await
            .unwrap();

        assert!(!response.success);
        assert!(response.message.contains("already exists"));
        assert_eq!(store.document_count().await, 1);
    }

    #[tokio::test]
    async fn created_account_is_readable_by_any_equivalent_spelling() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let handler = handler(store.clone());

        handler
            .handle(CreateAccount::new("Acme Corp"))
            .await
            .unwrap();

        let key = NameKey::normalize("aCmE cOrP");
        let found = store
            .query_first(
                &locator(),
                QuerySpec::lookup_by_name_key(&key),
                PartitionScope::for_type(DocumentType::Account),
            )
            .await
            .unwrap();
        assert!(found.is_some());
    }
}
