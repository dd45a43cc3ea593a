use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    CollectionLocator, Document, PartitionScope, QuerySpec, Result, StoreError,
    store::{DocumentStore, DocumentStream},
};

/// In-memory document store for tests and local wiring.
///
/// Documents are kept in per-partition vectors and matched against a
/// query's bound parameters by exact field equality, mirroring how a real
/// backend resolves parameterized filters.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    partitions: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl InMemoryDocumentStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of documents across all partitions.
    pub async fn document_count(&self) -> usize {
        self.partitions.read().await.values().map(Vec::len).sum()
    }

    /// Removes all documents.
    pub async fn clear(&self) {
        self.partitions.write().await.clear();
    }

    /// Seeds a document directly into its partition, bypassing the insert
    /// path. Test setup only.
    pub async fn seed(&self, document: Document) {
        let mut partitions = self.partitions.write().await;
        partitions
            .entry(document.document_type.as_str().to_string())
            .or_default()
            .push(document);
    }
}

fn matches_spec(document: &Document, spec: &QuerySpec) -> bool {
    spec.filters().iter().all(|filter| {
        let expected = spec
            .parameters()
            .iter()
            .find(|parameter| parameter.name == filter.parameter)
            .map(|parameter| &parameter.value);
        match expected {
            Some(expected) => document.field(&filter.field) == Some(expected),
            None => false,
        }
    })
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn execute_query(
        &self,
        _locator: &CollectionLocator,
        spec: QuerySpec,
        partition: PartitionScope,
    ) -> Result<DocumentStream> {
        let partitions = self.partitions.read().await;
        let documents = partitions.get(partition.key()).cloned().unwrap_or_default();

        let mut matches: Vec<Document> = documents
            .into_iter()
            .filter(|document| matches_spec(document, &spec))
            .collect();
        if let Some(limit) = spec.result_limit() {
            matches.truncate(limit);
        }

        tracing::trace!(
            partition = %partition,
            query = %spec.text(),
            matched = matches.len(),
            "in-memory query executed"
        );

        Ok(Box::pin(stream::iter(matches.into_iter().map(Ok))))
    }

    async fn insert_document(
        &self,
        _locator: &CollectionLocator,
        mut document: Document,
        partition: PartitionScope,
    ) -> Result<Document> {
        if document.document_type != partition.document_type() {
            return Err(StoreError::QueryRejected(format!(
                "document partition `{}` does not match write scope `{}`",
                document.document_type, partition
            )));
        }

        if document.id.is_none() {
            document.id = Some(Uuid::new_v4().to_string());
        }

        let mut partitions = self.partitions.write().await;
        partitions
            .entry(partition.key().to_string())
            .or_default()
            .push(document.clone());

        Ok(document)
    }
}
