//! Nullable infrastructure for deterministic testing.
//!
//! The external ledger store is abstracted behind a trait; this crate
//! provides test-friendly implementations that are deterministic, can be
//! controlled programmatically, and never touch the filesystem or network.
//!
//! Usage: swap the real store for a nullable in tests.

pub mod store;

pub use store::{FaultyStore, NullStore};
