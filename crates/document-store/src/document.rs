use common::DocumentType;
use serde::{Deserialize, Serialize};

/// A stored document: the flat on-disk record owned by the store.
///
/// The core only ever reads a document within the scope of one query
/// execution; nothing retains it past mapping into a domain entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned identifier. `None` until the document is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Partition discriminator.
    pub document_type: DocumentType,

    /// Flat field map.
    #[serde(flatten)]
    pub body: serde_json::Map<String, serde_json::Value>,
}

impl Document {
    /// Creates a new document builder for the given partition.
    pub fn builder(document_type: DocumentType) -> DocumentBuilder {
        DocumentBuilder {
            id: None,
            document_type,
            body: serde_json::Map::new(),
        }
    }

    /// Returns a body field, if present.
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.body.get(name)
    }

    /// Returns a body field as a string slice, if present and textual.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.body.get(name).and_then(|value| value.as_str())
    }
}

/// Builder for constructing documents.
#[derive(Debug)]
pub struct DocumentBuilder {
    id: Option<String>,
    document_type: DocumentType,
    body: serde_json::Map<String, serde_json::Value>,
}

impl DocumentBuilder {
    /// Sets the document id. If not set, the store assigns one on insert.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a body field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.body.insert(name.into(), value.into());
        self
    }

    /// Builds the document.
    pub fn build(self) -> Document {
        Document {
            id: self.id,
            document_type: self.document_type,
            body: self.body,
        }
    }
}
