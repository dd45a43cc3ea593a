pub mod types;

pub use types::{AccountId, DocumentType, NameKey};
