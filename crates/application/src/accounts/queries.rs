//! Account lookup queries.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use common::{DocumentType, NameKey};
use document_store::{
    CollectionLocator, DocumentStore, DocumentStoreExt, PartitionScope, QuerySpec,
};
use domain::{Account, map_document_to_account};

use crate::accounts::views::AccountDetailsView;
use crate::authorization::{AccountAuthorizer, AuthorizationContext};
use crate::cache::AccountCache;
use crate::error::HandlerError;
use crate::request::{Handle, Query, Request};

/// How long a cached account stays fresh after a store read.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Query: look up one account by display name or name key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAccountDetails {
    /// Raw caller-supplied lookup key; normalized before any use.
    pub lookup_key: String,

    /// Caller context used to populate the capability flags.
    pub context: AuthorizationContext,
}

impl GetAccountDetails {
    /// Creates the query for an anonymous caller.
    pub fn new(lookup_key: impl Into<String>) -> Self {
        Self {
            lookup_key: lookup_key.into(),
            context: AuthorizationContext::anonymous(),
        }
    }

    /// Attaches the caller's authorization context.
    pub fn with_context(mut self, context: AuthorizationContext) -> Self {
        self.context = context;
        self
    }
}

impl Request for GetAccountDetails {
    type Response = AccountDetailsView;

    fn name() -> &'static str {
        "GetAccountDetails"
    }
}

impl Query for GetAccountDetails {}

/// Handler for [`GetAccountDetails`].
///
/// Pipeline: normalize the lookup key, consult the cache, fall through to a
/// single partition-scoped store query, map the first match, write the
/// entity back through the cache, shape the response. At most one store
/// query per invocation; cache failures never fail the request.
pub struct GetAccountDetailsHandler<S> {
    store: Arc<S>,
    cache: Arc<dyn AccountCache>,
    authorizer: Arc<dyn AccountAuthorizer>,
    locator: CollectionLocator,
}

impl<S: DocumentStore> GetAccountDetailsHandler<S> {
    /// Creates the handler with its collaborators.
    pub fn new(
        store: Arc<S>,
        cache: Arc<dyn AccountCache>,
        authorizer: Arc<dyn AccountAuthorizer>,
        locator: CollectionLocator,
    ) -> Self {
        Self {
            store,
            cache,
            authorizer,
            locator,
        }
    }

    /// Runs the single store query and, on a hit, writes the mapped entity
    /// through to the cache.
    async fn lookup_in_store(&self, name_key: &NameKey) -> Result<Option<Account>, HandlerError> {
        let spec = QuerySpec::lookup_by_name_key(name_key);
        let partition = PartitionScope::for_type(DocumentType::Account);

        let document = self
            .store
            .query_first(&self.locator, spec, partition)
            .await
            .map_err(HandlerError::from_store)?;
        metrics::counter!("account_store_lookups").increment(1);

        let Some(document) = document else {
            tracing::debug!(key = %name_key, "no account matches lookup key");
            return Ok(None);
        };

        let account = map_document_to_account(&document)?;

        // Write-through happens only after a complete, successfully mapped
        // result, so a cancelled or failed lookup never leaves a cache
        // entry behind.
        if let Err(error) = self.cache.set(name_key, &account, Some(CACHE_TTL)).await {
            tracing::warn!(key = %name_key, %error, "cache set failed, returning store result");
            metrics::counter!("account_cache_failures").increment(1);
        }

        Ok(Some(account))
    }
}

#[async_trait]
impl<S: DocumentStore> Handle<GetAccountDetails> for GetAccountDetailsHandler<S> {
    async fn handle(&self, request: GetAccountDetails) -> Result<AccountDetailsView, HandlerError> {
        let name_key = NameKey::normalize(&request.lookup_key);

        let cached = match self.cache.get(&name_key).await {
            Ok(hit) => hit,
            Err(error) => {
                tracing::warn!(key = %name_key, %error, "cache get failed, falling through to store");
                metrics::counter!("account_cache_failures").increment(1);
                None
            }
        };

        let account = if let Some(account) = cached {
            tracing::debug!(key = %name_key, "account served from cache");
            metrics::counter!("account_cache_hits").increment(1);
            Some(account)
        } else {
            metrics::counter!("account_cache_misses").increment(1);
            self.lookup_in_store(&name_key).await?
        };

        Ok(AccountDetailsView {
            account,
            edit_enabled: self.authorizer.can_edit(&request.context),
            delete_enabled: self.authorizer.can_delete(&request.context),
        })
    }
}
