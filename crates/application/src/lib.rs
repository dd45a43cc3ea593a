//! Application layer: typed request dispatch and the account handlers.
//!
//! This crate is the request-handling core:
//! - [`Request`], [`Query`], and [`Command`] name operations and their
//!   response types
//! - [`Dispatcher`] routes each request value to its single registered
//!   handler, with the registration table validated eagerly at startup
//! - [`AccountCache`] and [`AccountAuthorizer`] are the collaborator
//!   contracts handlers consume
//! - the account handlers orchestrate
//!   cache → query → store → map → cache-write → response shaping

pub mod accounts;
pub mod authorization;
pub mod cache;
pub mod dispatcher;
pub mod error;
pub mod request;

pub use accounts::{
    AccountDetailsView, CreateAccount, CreateAccountHandler, CreateAccountResponse,
    GetAccountDetails, GetAccountDetailsHandler,
};
pub use authorization::{AccountAuthorizer, AllowAll, AuthorizationContext};
pub use cache::{AccountCache, CacheError, InMemoryAccountCache, NoopCache};
pub use dispatcher::{DispatchError, Dispatcher, DispatcherBuilder};
pub use error::HandlerError;
pub use request::{Command, Handle, Query, Request};
