use std::pin::Pin;

use async_trait::async_trait;
use futures_core::Stream;
use futures_util::StreamExt;

use crate::{CollectionLocator, Document, PartitionScope, QuerySpec, Result};

/// A lazy sequence of documents produced by one query execution.
pub type DocumentStream = Pin<Box<dyn Stream<Item = Result<Document>> + Send>>;

/// Collaborator contract for document store backends.
///
/// Backends execute parameterized queries scoped to a single partition and
/// yield matching documents lazily. Backend-specific failures must be
/// wrapped as [`StoreError`](crate::StoreError) and never leaked raw. All
/// implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Executes a parameterized query against one partition of the
    /// collection.
    async fn execute_query(
        &self,
        locator: &CollectionLocator,
        spec: QuerySpec,
        partition: PartitionScope,
    ) -> Result<DocumentStream>;

    /// Inserts a document into the given partition, assigning an id when
    /// the document has none. Returns the stored form.
    async fn insert_document(
        &self,
        locator: &CollectionLocator,
        document: Document,
        partition: PartitionScope,
    ) -> Result<Document>;
}

/// Extension trait providing convenience methods for document stores.
#[async_trait]
pub trait DocumentStoreExt: DocumentStore {
    /// Executes a query and returns only the first matching document.
    async fn query_first(
        &self,
        locator: &CollectionLocator,
        spec: QuerySpec,
        partition: PartitionScope,
    ) -> Result<Option<Document>> {
        let mut stream = self.execute_query(locator, spec.limit(1), partition).await?;
        match stream.next().await {
            Some(document) => Ok(Some(document?)),
            None => Ok(None),
        }
    }
}

// Blanket implementation for all DocumentStore implementations
impl<T: DocumentStore + ?Sized> DocumentStoreExt for T {}
