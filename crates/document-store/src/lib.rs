//! Document store collaborator layer.
//!
//! This crate owns the shapes that cross the storage boundary:
//! - [`Document`] is the flat on-disk record with its partition discriminator
//! - [`QuerySpec`] builds parameterized queries (values are bound, never
//!   interpolated into query text)
//! - [`CollectionLocator`] and [`PartitionScope`] say where a query runs
//! - [`DocumentStore`] is the backend contract, returning a lazy stream
//! - [`InMemoryDocumentStore`] is the backend used by tests and local wiring

pub mod collection;
pub mod document;
pub mod error;
pub mod memory;
pub mod query;
pub mod store;

pub use common::{DocumentType, NameKey};

pub use collection::{CollectionLocator, PartitionScope};
pub use document::{Document, DocumentBuilder};
pub use error::{Result, StoreError};
pub use memory::InMemoryDocumentStore;
pub use query::{FieldFilter, QueryParameter, QuerySpec};
pub use store::{DocumentStore, DocumentStoreExt, DocumentStream};
