//! Account queries and commands.

pub mod commands;
pub mod queries;
pub mod views;

pub use commands::{CreateAccount, CreateAccountHandler, CreateAccountResponse};
pub use queries::{GetAccountDetails, GetAccountDetailsHandler};
pub use views::AccountDetailsView;
