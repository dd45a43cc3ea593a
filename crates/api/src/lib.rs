//! HTTP API surface and bootstrap for the account service core.
//!
//! Thin by design: routes translate HTTP to request values and hand them to
//! the dispatcher; every pipeline decision lives in the `application` crate.
//! Wiring is explicit construction: each collaborator is built here and
//! passed through constructors, and the dispatcher registration table is
//! validated before the server starts.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use application::{
    AllowAll, CreateAccount, CreateAccountHandler, DispatchError, Dispatcher, GetAccountDetails,
    GetAccountDetailsHandler, InMemoryAccountCache,
};
use axum::Router;
use axum::routing::{get, post};
use document_store::{CollectionLocator, DocumentStore, InMemoryDocumentStore};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::accounts::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/accounts", post(routes::accounts::create))
        .route("/accounts/{name}", get(routes::accounts::get))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Builds the dispatcher registration table for a store.
///
/// Validation happens here, eagerly: a duplicate binding fails in `build`,
/// and a missing required binding fails the `ensure` calls, both before
/// the process starts serving.
pub fn build_dispatcher<S: DocumentStore + 'static>(
    store: Arc<S>,
    locator: CollectionLocator,
) -> Result<Dispatcher, DispatchError> {
    let cache = Arc::new(InMemoryAccountCache::new());
    let authorizer = Arc::new(AllowAll);

    let dispatcher = Dispatcher::builder()
        .register(GetAccountDetailsHandler::new(
            store.clone(),
            cache,
            authorizer,
            locator.clone(),
        ))
        .register(CreateAccountHandler::new(store, locator))
        .build()?;

    dispatcher.ensure::<GetAccountDetails>()?;
    dispatcher.ensure::<CreateAccount>()?;

    Ok(dispatcher)
}

/// Creates the default application state backed by the in-memory store.
pub fn create_default_state(config: &config::Config) -> Result<Arc<AppState>, DispatchError> {
    let store = Arc::new(InMemoryDocumentStore::new());
    let dispatcher = build_dispatcher(store, config.locator())?;
    Ok(Arc::new(AppState { dispatcher }))
}
