//! Shared utilities for the multibank ledger.

pub mod logging;

pub use logging::init_tracing;
