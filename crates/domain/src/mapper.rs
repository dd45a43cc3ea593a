//! Document-to-entity mapping.

use chrono::{DateTime, Utc};
use common::{AccountId, NameKey};
use document_store::Document;
use uuid::Uuid;

use crate::account::Account;
use crate::error::MappingError;

/// Maps a stored document to an [`Account`].
///
/// Total over well-formed documents: `id` and `name_key` are required and
/// their absence (or an unparseable id) fails with [`MappingError`].
/// Descriptive fields are optional and default to absent. Never returns a
/// partially populated entity.
pub fn map_document_to_account(document: &Document) -> Result<Account, MappingError> {
    let raw_id = document
        .id
        .as_deref()
        .ok_or(MappingError::MissingField { field: "id" })?;
    let id = Uuid::parse_str(raw_id)
        .map(AccountId::from_uuid)
        .map_err(|_| MappingError::InvalidId {
            value: raw_id.to_string(),
        })?;

    let name_key = document
        .field_str("name_key")
        .map(NameKey::normalize)
        .ok_or(MappingError::MissingField { field: "name_key" })?;

    let name = document.field_str("name").unwrap_or_default().to_string();
    let email = document.field_str("email").map(str::to_string);
    let first_name = document.field_str("first_name").map(str::to_string);
    let last_name = document.field_str("last_name").map(str::to_string);
    let created_at = document
        .field_str("created_at")
        .and_then(|raw| raw.parse::<DateTime<Utc>>().ok());

    Ok(Account {
        id,
        name_key,
        name,
        email,
        first_name,
        last_name,
        created_at,
    })
}
