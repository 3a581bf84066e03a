//! Abstract storage trait for the multibank ledger.
//!
//! The ledger engine itself (replication, consensus, persistence) is an
//! external collaborator; the state machine depends only on this trait.
//! Any backend must provide:
//! - read-your-writes within a single invocation,
//! - byte-exact value storage,
//! - idempotent overwrite on put,
//! - per-key serialization of conflicting writes. Adjust performs an
//!   unprotected read-modify-write, so it is only safe against lost updates
//!   if the backend serializes writes to the same key.

pub mod error;

pub use error::StoreError;

/// Key-value ledger store consumed by the state machine.
pub trait LedgerStore {
    /// Read the value stored under `key`. An absent key is `Ok(None)`,
    /// never an error.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}
