//! Nullable stores — thread-safe in-memory storage for testing.

use multibank_store::{LedgerStore, StoreError};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory key-value store for testing.
///
/// Provides the full collaborator contract the state machine requires:
/// read-your-writes, byte-exact values, idempotent overwrite.
pub struct NullStore {
    cells: Mutex<HashMap<String, Vec<u8>>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            cells: Mutex::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.cells.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for NullStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.cells.lock().unwrap().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.cells
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// A store with injectable failures, for exercising the read/write error
/// paths of the state machine.
pub struct FaultyStore {
    inner: NullStore,
    fail_gets: bool,
    /// `Some(n)` lets `n` puts succeed and fails every put after that.
    puts_before_failure: Mutex<Option<u32>>,
}

impl FaultyStore {
    /// Every `get` fails; puts go through.
    pub fn failing_gets() -> Self {
        Self {
            inner: NullStore::new(),
            fail_gets: true,
            puts_before_failure: Mutex::new(None),
        }
    }

    /// The first `n` puts succeed, every later put fails; gets go through.
    pub fn failing_puts_after(n: u32) -> Self {
        Self {
            inner: NullStore::new(),
            fail_gets: false,
            puts_before_failure: Mutex::new(Some(n)),
        }
    }

    /// The underlying in-memory store, for seeding and asserting state.
    pub fn inner(&self) -> &NullStore {
        &self.inner
    }
}

impl LedgerStore for FaultyStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if self.fail_gets {
            return Err(StoreError::Backend(format!("injected get failure for {key}")));
        }
        self.inner.get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut budget = self.puts_before_failure.lock().unwrap();
        if let Some(remaining) = budget.as_mut() {
            if *remaining == 0 {
                return Err(StoreError::Backend(format!("injected put failure for {key}")));
            }
            *remaining -= 1;
        }
        self.inner.put(key, value)
    }
}
