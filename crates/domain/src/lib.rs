//! Domain layer: the account entity and document mapping.
//!
//! This crate provides:
//! - [`Account`], the plain domain entity with identity and a normalized
//!   name key
//! - [`map_document_to_account`], the explicit narrowing conversion from a
//!   stored document into the entity
//! - [`MappingError`], the malformed-document failure mode

pub mod account;
pub mod error;
pub mod mapper;

pub use common::{AccountId, NameKey};

pub use account::Account;
pub use error::MappingError;
pub use mapper::map_document_to_account;
