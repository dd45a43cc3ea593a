//! Typed request dispatch over a validated registration table.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::error::HandlerError;
use crate::request::{Handle, Request};

/// Errors in the request-to-handler binding.
///
/// Both variants are configuration errors, not transient conditions: the
/// registration table is the single source of truth and is validated when
/// it is built, so hitting one of these means the process was wired wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No handler is bound for the request type.
    #[error("no handler registered for request type `{request_type}`")]
    UnregisteredRequestType { request_type: &'static str },

    /// More than one handler was bound for the same request type.
    #[error("more than one handler registered for request type `{request_type}`")]
    AmbiguousRequestType { request_type: &'static str },
}

struct Binding {
    request_type: &'static str,
    // Holds an `Arc<dyn Handle<R>>` for the `R` this entry is keyed by.
    handler: Box<dyn Any + Send + Sync>,
}

/// Routes each request value to its single registered handler.
///
/// Pure and non-blocking itself; the only awaits happen inside handlers.
/// Dispatch failures are never retried here.
pub struct Dispatcher {
    bindings: HashMap<TypeId, Binding>,
}

impl Dispatcher {
    /// Creates a new registration table builder.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    /// Dispatches a request to its handler.
    ///
    /// Fails with [`DispatchError::UnregisteredRequestType`] when no handler
    /// is bound for the request's concrete type.
    pub async fn dispatch<R: Request>(&self, request: R) -> Result<R::Response, HandlerError> {
        let binding = self
            .bindings
            .get(&TypeId::of::<R>())
            .ok_or(DispatchError::UnregisteredRequestType {
                request_type: R::name(),
            })?;

        // The table is keyed by the request's TypeId, so this downcast only
        // fails if the binding was built for a different type, which the
        // builder cannot produce.
        let handler = binding
            .handler
            .downcast_ref::<Arc<dyn Handle<R>>>()
            .ok_or(DispatchError::UnregisteredRequestType {
                request_type: R::name(),
            })?;

        tracing::debug!(request_type = binding.request_type, "dispatching request");
        handler.handle(request).await
    }

    /// Asserts that a handler is bound for `R`.
    ///
    /// Startup validation: call once per required request type before
    /// serving, so a missing binding fails fast instead of at first use.
    pub fn ensure<R: Request>(&self) -> Result<(), DispatchError> {
        if self.bindings.contains_key(&TypeId::of::<R>()) {
            Ok(())
        } else {
            Err(DispatchError::UnregisteredRequestType {
                request_type: R::name(),
            })
        }
    }

    /// Returns the number of registered request types.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Builds the dispatcher's registration table.
///
/// Bindings are collected first and validated by [`build`], so a duplicate
/// registration fails eagerly at startup rather than surfacing at dispatch
/// time.
///
/// [`build`]: DispatcherBuilder::build
#[derive(Default)]
pub struct DispatcherBuilder {
    bindings: Vec<(TypeId, &'static str, Box<dyn Any + Send + Sync>)>,
}

impl DispatcherBuilder {
    /// Binds `handler` to request type `R`.
    pub fn register<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: Handle<R> + 'static,
    {
        let handler: Arc<dyn Handle<R>> = Arc::new(handler);
        self.bindings
            .push((TypeId::of::<R>(), R::name(), Box::new(handler)));
        self
    }

    /// Validates the table and produces the dispatcher.
    ///
    /// Fails with [`DispatchError::AmbiguousRequestType`] if two handlers
    /// were registered for the same request type.
    pub fn build(self) -> Result<Dispatcher, DispatchError> {
        let mut table = HashMap::with_capacity(self.bindings.len());
        for (type_id, request_type, handler) in self.bindings {
            let binding = Binding {
                request_type,
                handler,
            };
            if table.insert(type_id, binding).is_some() {
                return Err(DispatchError::AmbiguousRequestType { request_type });
            }
        }
        Ok(Dispatcher { bindings: table })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    struct Ping;

    impl Request for Ping {
        type Response = &'static str;

        fn name() -> &'static str {
            "Ping"
        }
    }

    struct Echo(String);

    impl Request for Echo {
        type Response = String;

        fn name() -> &'static str {
            "Echo"
        }
    }

    #[derive(Default)]
    struct PingHandler;

    #[async_trait]
    impl Handle<Ping> for PingHandler {
        async fn handle(&self, _request: Ping) -> Result<&'static str, HandlerError> {
            Ok("pong")
        }
    }

    struct CountingPingHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Handle<Ping> for CountingPingHandler {
        async fn handle(&self, _request: Ping) -> Result<&'static str, HandlerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("pong")
        }
    }

    struct EchoHandler;

    #[async_trait]
    impl Handle<Echo> for EchoHandler {
        async fn handle(&self, request: Echo) -> Result<String, HandlerError> {
            Ok(request.0)
        }
    }

    #[tokio::test]
    async fn dispatch_routes_to_the_registered_handler() {
        let dispatcher = Dispatcher::builder()
            .register(PingHandler::default())
            .register(EchoHandler)
            .build()
            .unwrap();

        assert_eq!(dispatcher.dispatch(Ping).await.unwrap(), "pong");
        assert_eq!(
            dispatcher.dispatch(Echo("hello".to_string())).await.unwrap(),
            "hello"
        );
    }

    #[tokio::test]
    async fn dispatch_invokes_the_handler_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = Dispatcher::builder()
            .register(CountingPingHandler {
                calls: calls.clone(),
            })
            .build()
            .unwrap();

        dispatcher.dispatch(Ping).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        dispatcher.dispatch(Ping).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn dispatching_an_unregistered_type_fails() {
        let dispatcher = Dispatcher::builder()
            .register(EchoHandler)
            .build()
            .unwrap();

        let error = dispatcher.dispatch(Ping).await.unwrap_err();
        assert!(matches!(
            error,
            HandlerError::Dispatch(DispatchError::UnregisteredRequestType {
                request_type: "Ping"
            })
        ));
    }

    #[tokio::test]
    async fn duplicate_registration_fails_at_build() {
        let result = Dispatcher::builder()
            .register(PingHandler::default())
            .register(PingHandler::default())
            .build();

        assert!(matches!(
            result,
            Err(DispatchError::AmbiguousRequestType {
                request_type: "Ping"
            })
        ));
    }

    #[tokio::test]
    async fn ensure_validates_required_bindings() {
        let dispatcher = Dispatcher::builder()
            .register(PingHandler::default())
            .build()
            .unwrap();

        assert!(dispatcher.ensure::<Ping>().is_ok());
        assert_eq!(
            dispatcher.ensure::<Echo>(),
            Err(DispatchError::UnregisteredRequestType {
                request_type: "Echo"
            })
        );
    }

    #[tokio::test]
    async fn len_counts_registered_types() {
        let dispatcher = Dispatcher::builder()
            .register(PingHandler::default())
            .register(EchoHandler)
            .build()
            .unwrap();

        assert_eq!(dispatcher.len(), 2);
        assert!(!dispatcher.is_empty());
    }
}
