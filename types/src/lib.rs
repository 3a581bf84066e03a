//! Fundamental types for the multibank ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account and bank identifiers, balances, and the shared error
//! type for constructing them.

pub mod balance;
pub mod error;
pub mod name;

pub use balance::Balance;
pub use error::TypeError;
pub use name::{AccountName, BankName};
