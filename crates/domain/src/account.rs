//! The account entity.

use chrono::{DateTime, Utc};
use common::{AccountId, NameKey};
use serde::{Deserialize, Serialize};

/// A registered account.
///
/// Identity is the store-assigned [`AccountId`]; `name_key` is the
/// normalized unique lookup key derived from the display name. Instances
/// are transient value objects produced by the document mapper or the
/// creation path; nothing holds one by identity beyond a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identifier.
    pub id: AccountId,

    /// Normalized unique lookup key.
    pub name_key: NameKey,

    /// Display name as originally entered.
    pub name: String,

    /// Contact email, if one was provided.
    pub email: Option<String>,

    /// Owner's first name, if provided.
    pub first_name: Option<String>,

    /// Owner's last name, if provided.
    pub last_name: Option<String>,

    /// When the account was created, if recorded.
    pub created_at: Option<DateTime<Utc>>,
}
