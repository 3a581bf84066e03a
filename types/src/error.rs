//! Errors raised when constructing domain types from caller input.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("{what} name must be non-empty")]
    EmptyName { what: &'static str },

    #[error("invalid amount {input:?}: expected a base-10 integer")]
    InvalidAmount { input: String },
}
