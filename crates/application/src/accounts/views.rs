//! Caller-facing view models.

use domain::Account;
use serde::{Deserialize, Serialize};

/// Response for an account-details lookup.
///
/// Wraps the entity (absent when no account matches, which is a valid
/// outcome, not an error) plus the capability flags the caller's context
/// allows. Raw stored documents never reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetailsView {
    /// The matching account, if one exists.
    pub account: Option<Account>,

    /// Whether the caller may edit this account.
    pub edit_enabled: bool,

    /// Whether the caller may delete this account.
    pub delete_enabled: bool,
}
