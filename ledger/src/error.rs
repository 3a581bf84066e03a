use multibank_store::StoreError;
use multibank_types::TypeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("wrong number of arguments: {reason}")]
    ArgumentCount { reason: &'static str },

    #[error("{what} name must be non-empty")]
    InvalidName { what: &'static str },

    #[error("invalid amount {input:?}: expected a base-10 integer")]
    InvalidAmount { input: String },

    #[error("invalid function name {got:?}")]
    InvalidFunction { got: String },

    #[error("unknown method {got:?}, expecting \"deposit\" or \"withdraw\"")]
    UnknownMethod { got: String },

    #[error("no value stored for {key}")]
    NotFound { key: String },

    #[error("malformed value stored for {key}: {reason}")]
    MalformedValue { key: String, reason: String },

    #[error("store read failed for {key}")]
    StoreRead {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("store write failed for {key}")]
    StoreWrite {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("response serialization failed")]
    Serialization(#[from] serde_json::Error),
}

impl From<TypeError> for LedgerError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::EmptyName { what } => LedgerError::InvalidName { what },
            TypeError::InvalidAmount { input } => LedgerError::InvalidAmount { input },
        }
    }
}
