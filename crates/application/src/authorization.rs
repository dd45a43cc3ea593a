//! Authorization collaborator contract.

/// Caller identity and role information attached to a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationContext {
    /// Authenticated caller, if any.
    pub caller: Option<String>,

    /// Role names granted to the caller.
    pub roles: Vec<String>,
}

impl AuthorizationContext {
    /// Context for an unauthenticated caller with no roles.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for a named caller.
    pub fn for_caller(caller: impl Into<String>) -> Self {
        Self {
            caller: Some(caller.into()),
            roles: Vec::new(),
        }
    }

    /// Grants a role to this context.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Returns true if the context carries the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Per-capability yes/no decisions consumed by handlers.
///
/// Handlers only consume the decisions; the role logic itself lives behind
/// this contract, outside the request-handling core.
pub trait AccountAuthorizer: Send + Sync {
    /// May the caller edit the account in the response?
    fn can_edit(&self, context: &AuthorizationContext) -> bool;

    /// May the caller delete the account in the response?
    fn can_delete(&self, context: &AuthorizationContext) -> bool;
}

/// Grants every capability.
///
/// The upstream policy is undecided, so the default wiring keeps the
/// permissive behavior behind the contract, where a real policy can
/// replace it without touching handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccountAuthorizer for AllowAll {
    fn can_edit(&self, _context: &AuthorizationContext) -> bool {
        true
    }

    fn can_delete(&self, _context: &AuthorizationContext) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_all_grants_everything() {
        let context = AuthorizationContext::anonymous();
        assert!(AllowAll.can_edit(&context));
        assert!(AllowAll.can_delete(&context));
    }

    #[test]
    fn context_tracks_caller_and_roles() {
        let context = AuthorizationContext::for_caller("jane").with_role("admin");

        assert_eq!(context.caller.as_deref(), Some("jane"));
        assert!(context.has_role("admin"));
        assert!(!context.has_role("auditor"));
    }
}
