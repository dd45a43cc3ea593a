use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an account.
///
/// Wraps a UUID to provide type safety and prevent mixing up
/// account ids with other UUID-based identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Creates a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an account ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AccountId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<AccountId> for Uuid {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

/// Normalized unique lookup key derived from a raw display name.
///
/// Every `NameKey` has passed through [`NameKey::normalize`]: construction
/// and deserialization both apply the transform, so cache keys, query
/// parameters, and uniqueness checks always agree on the same value.
///
/// Normalization is Unicode lowercasing plus removal of all whitespace:
/// `"Acme Corp"`, `"acme corp"`, and `"ACMECORP"` all produce `"acmecorp"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NameKey(String);

impl NameKey {
    /// Derives the normalized key from a raw caller-supplied string.
    ///
    /// Pure and idempotent: normalizing an already-normalized key returns
    /// the same value.
    pub fn normalize(raw: &str) -> Self {
        let key = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        Self(key)
    }

    /// Returns the normalized key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the raw input contained no usable characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for NameKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(NameKey::normalize(&raw))
    }
}

impl std::fmt::Display for NameKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NameKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Partition discriminator for stored documents.
///
/// The document store physically segregates documents by this value; every
/// query and write is scoped to exactly one partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Account,
    Platform,
}

impl DocumentType {
    /// Returns the partition key value for this document type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Account => "account",
            DocumentType::Platform => "platform",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_new_creates_unique_ids() {
        let id1 = AccountId::new();
        let id2 = AccountId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn account_id_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = AccountId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn account_id_serialization_roundtrip() {
        let id = AccountId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn normalize_lowercases_and_strips_whitespace() {
        assert_eq!(NameKey::normalize("Acme Corp").as_str(), "acmecorp");
        assert_eq!(NameKey::normalize("  ACME\tCorp \n").as_str(), "acmecorp");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = NameKey::normalize("Acme Corp");
        let twice = NameKey::normalize(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn equivalent_spellings_normalize_to_the_same_key() {
        let keys = ["Acme Corp", "acme corp", "ACMECORP", "a c m e c o r p"];
        let normalized: Vec<NameKey> = keys.iter().map(|k| NameKey::normalize(k)).collect();
        assert!(normalized.iter().all(|k| k == &normalized[0]));
    }

    #[test]
    fn normalize_preserves_non_whitespace_special_characters() {
        assert_eq!(
            NameKey::normalize("O'Brien & Sons").as_str(),
            "o'brien&sons"
        );
    }

    #[test]
    fn normalize_of_blank_input_is_empty() {
        assert!(NameKey::normalize("   \t ").is_empty());
        assert!(!NameKey::normalize("x").is_empty());
    }

    #[test]
    fn name_key_deserialization_normalizes() {
        let key: NameKey = serde_json::from_str("\"Acme Corp\"").unwrap();
        assert_eq!(key.as_str(), "acmecorp");
    }

    #[test]
    fn name_key_serialization_roundtrip() {
        let key = NameKey::normalize("Acme Corp");
        let json = serde_json::to_string(&key).unwrap();
        let deserialized: NameKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);
    }

    #[test]
    fn document_type_partition_key() {
        assert_eq!(DocumentType::Account.as_str(), "account");
        assert_eq!(DocumentType::Account.to_string(), "account");
        assert_eq!(DocumentType::Platform.as_str(), "platform");
    }

    #[test]
    fn document_type_serializes_lowercase() {
        let json = serde_json::to_string(&DocumentType::Account).unwrap();
        assert_eq!(json, "\"account\"");
    }
}
