use common::DocumentType;
use serde::{Deserialize, Serialize};

/// Locator for one logical document collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionLocator {
    database: String,
    collection: String,
}

impl CollectionLocator {
    /// Creates a locator from database and collection names.
    pub fn new(database: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collection: collection.into(),
        }
    }

    /// Returns the database name.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Returns the collection name.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Returns the resource path, e.g. `dbs/core/colls/documents`.
    pub fn path(&self) -> String {
        format!("dbs/{}/colls/{}", self.database, self.collection)
    }
}

impl std::fmt::Display for CollectionLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// The partition a query or write is scoped to.
///
/// Partitions are keyed by document type; a scope restricts an operation to
/// that single partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionScope(DocumentType);

impl PartitionScope {
    /// Creates a scope covering the partition for one document type.
    pub fn for_type(document_type: DocumentType) -> Self {
        Self(document_type)
    }

    /// Returns the document type this scope covers.
    pub fn document_type(&self) -> DocumentType {
        self.0
    }

    /// Returns the raw partition key value.
    pub fn key(&self) -> &'static str {
        self.0.as_str()
    }
}

impl std::fmt::Display for PartitionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
