//! Request abstractions.

use std::any;

use async_trait::async_trait;

use crate::error::HandlerError;

/// A value naming one operation and carrying its parameters.
///
/// Requests are immutable values; exactly one handler type is bound to each
/// request type when the dispatcher registration table is built.
pub trait Request: Send + 'static {
    /// The response value returned to the caller.
    type Response: Send + 'static;

    /// Request type name used in errors and logs.
    fn name() -> &'static str {
        any::type_name::<Self>()
    }
}

/// Marker for read-only, idempotent requests.
pub trait Query: Request {}

/// Marker for requests that may mutate state and fail business validation.
pub trait Command: Request {}

/// The single unit of logic bound to one request type.
#[async_trait]
pub trait Handle<R: Request>: Send + Sync {
    /// Executes the request, producing its response.
    async fn handle(&self, request: R) -> Result<R::Response, HandlerError>;
}
