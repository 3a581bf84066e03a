//! Ledger state machine for multi-bank account holdings.
//!
//! Three operations over an abstract key-value ledger store: initialize an
//! account's holdings, adjust one holding (deposit/withdraw), and query
//! either the bank list or a single balance. Every invocation is stateless
//! and rehydrates from the store; the handlers are free functions taking the
//! store as an explicit parameter.

pub mod adjust;
pub mod codec;
pub mod dispatch;
pub mod error;
pub mod init;
pub mod query;
pub mod response;

pub use adjust::adjust;
pub use dispatch::run;
pub use error::LedgerError;
pub use init::initialize;
pub use query::query;
pub use response::{error_payload, QueryResponse};
