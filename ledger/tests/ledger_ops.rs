//! Integration tests exercising the full state machine:
//! argument parsing → key derivation → store writes → readback through query.
//!
//! These tests wire the operations to the nullable stores, verifying the
//! system works end-to-end — not just in isolation.

use multibank_ledger::{adjust, error_payload, initialize, query, run, LedgerError};
use multibank_ledger::codec;
use multibank_nullables::{FaultyStore, NullStore};
use multibank_store::LedgerStore;
use multibank_types::BankName;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn fresh_store() -> NullStore {
    multibank_utils::init_tracing();
    NullStore::new()
}

/// The worked example used throughout: alice holds 100 at bofa, 50 at chase.
fn alice_store() -> NullStore {
    let store = fresh_store();
    initialize(&store, &args(&["alice", "bofa", "100", "chase", "50"])).unwrap();
    store
}

// ---------------------------------------------------------------------------
// 1. Initialize
// ---------------------------------------------------------------------------

#[test]
fn initialize_writes_holdings_and_bank_list() {
    let store = alice_store();

    assert_eq!(store.get("alice_bofa").unwrap(), Some(b"100".to_vec()));
    assert_eq!(store.get("alice_chase").unwrap(), Some(b"50".to_vec()));
    assert_eq!(store.get("alice").unwrap(), Some(b"bofa,chase".to_vec()));
}

#[test]
fn initialize_keeps_duplicate_banks_in_order() {
    let store = fresh_store();
    initialize(&store, &args(&["bob", "bofa", "1", "bofa", "2"])).unwrap();

    let list = codec::decode_bank_list("bob", &store.get("bob").unwrap().unwrap()).unwrap();
    assert_eq!(
        list,
        vec![BankName::new("bofa").unwrap(), BankName::new("bofa").unwrap()]
    );
    // The second pair overwrote the first: same holding key.
    assert_eq!(store.get("bob_bofa").unwrap(), Some(b"2".to_vec()));
}

#[test]
fn initialize_accepts_negative_amounts_verbatim() {
    let store = fresh_store();
    initialize(&store, &args(&["carol", "bofa", "-25"])).unwrap();
    assert_eq!(store.get("carol_bofa").unwrap(), Some(b"-25".to_vec()));
}

#[test]
fn partial_initialize_leaves_earlier_writes_visible() {
    // First put (alice_bofa) succeeds, second (alice_chase) fails.
    let store = FaultyStore::failing_puts_after(1);
    let err = initialize(&store, &args(&["alice", "bofa", "100", "chase", "50"])).unwrap_err();

    assert!(matches!(&err, LedgerError::StoreWrite { key, .. } if key == "alice_chase"));
    assert_eq!(store.inner().get("alice_bofa").unwrap(), Some(b"100".to_vec()));
    assert_eq!(store.inner().get("alice_chase").unwrap(), None);
    // The bank-list write is skipped after a failing put.
    assert_eq!(store.inner().get("alice").unwrap(), None);
}

// ---------------------------------------------------------------------------
// 2. Adjust
// ---------------------------------------------------------------------------

#[test]
fn deposit_increases_balance() {
    let store = alice_store();
    adjust(&store, &args(&["deposit", "alice", "30", "bofa"])).unwrap();
    assert_eq!(store.get("alice_bofa").unwrap(), Some(b"130".to_vec()));
}

#[test]
fn overdraw_floors_at_zero() {
    let store = alice_store();
    adjust(&store, &args(&["deposit", "alice", "30", "bofa"])).unwrap();
    // 130 - 200 = -70, not > 0, so the balance floors to 0.
    adjust(&store, &args(&["withdraw", "alice", "200", "bofa"])).unwrap();
    assert_eq!(store.get("alice_bofa").unwrap(), Some(b"0".to_vec()));
}

#[test]
fn exact_withdrawal_floors_at_zero() {
    let store = alice_store();
    adjust(&store, &args(&["deposit", "alice", "30", "bofa"])).unwrap();
    // 130 - 130 = 0 is not strictly positive, so the same floor rule applies.
    adjust(&store, &args(&["withdraw", "alice", "130", "bofa"])).unwrap();
    assert_eq!(store.get("alice_bofa").unwrap(), Some(b"0".to_vec()));
}

#[test]
fn adjust_never_touches_the_bank_list() {
    let store = alice_store();
    adjust(&store, &args(&["deposit", "alice", "30", "bofa"])).unwrap();
    adjust(&store, &args(&["withdraw", "alice", "10", "chase"])).unwrap();
    assert_eq!(store.get("alice").unwrap(), Some(b"bofa,chase".to_vec()));
}

#[test]
fn adjust_surfaces_store_read_failures() {
    let store = FaultyStore::failing_gets();
    let err = adjust(&store, &args(&["deposit", "alice", "30", "bofa"])).unwrap_err();
    assert!(matches!(err, LedgerError::StoreRead { key, .. } if key == "alice_bofa"));
}

#[test]
fn adjust_surfaces_store_write_failures() {
    let store = FaultyStore::failing_puts_after(1);
    store.put("alice_bofa", b"100").unwrap();
    let err = adjust(&store, &args(&["deposit", "alice", "30", "bofa"])).unwrap_err();
    assert!(matches!(err, LedgerError::StoreWrite { key, .. } if key == "alice_bofa"));
    // The failed write left the old balance in place.
    assert_eq!(store.inner().get("alice_bofa").unwrap(), Some(b"100".to_vec()));
}

// ---------------------------------------------------------------------------
// 3. Query
// ---------------------------------------------------------------------------

#[test]
fn query_one_argument_returns_bank_list() {
    let store = alice_store();
    let payload = query(&store, "query", &args(&["alice"])).unwrap();
    assert_eq!(payload, br#"{"Name":"alice","List":"bofa,chase"}"#);
}

#[test]
fn query_two_arguments_returns_amount() {
    let store = alice_store();
    adjust(&store, &args(&["deposit", "alice", "30", "bofa"])).unwrap();
    let payload = query(&store, "query", &args(&["alice", "bofa"])).unwrap();
    assert_eq!(payload, br#"{"Name":"alice_bofa","Amount":"130"}"#);
}

#[test]
fn query_unwritten_key_is_not_found() {
    let store = alice_store();
    let err = query(&store, "query", &args(&["alice", "citi"])).unwrap_err();
    assert!(matches!(err, LedgerError::NotFound { key } if key == "alice_citi"));
}

#[test]
fn query_surfaces_store_read_failures() {
    let store = FaultyStore::failing_gets();
    let err = query(&store, "query", &args(&["alice"])).unwrap_err();
    assert!(matches!(err, LedgerError::StoreRead { key, .. } if key == "alice"));
}

#[test]
fn query_errors_render_as_error_payload() {
    let store = fresh_store();
    let err = query(&store, "query", &args(&["alice"])).unwrap_err();
    assert_eq!(
        error_payload(&err),
        br#"{"Error":"no value stored for alice"}"#
    );
}

// ---------------------------------------------------------------------------
// 4. Dispatch and key collisions
// ---------------------------------------------------------------------------

#[test]
fn dispatched_lifecycle_matches_direct_calls() {
    let store = fresh_store();
    run(&store, "init", &args(&["alice", "bofa", "100", "chase", "50"])).unwrap();
    run(&store, "invoke", &args(&["deposit", "alice", "30", "bofa"])).unwrap();
    let payload = run(&store, "query", &args(&["alice", "bofa"])).unwrap().unwrap();
    assert_eq!(payload, br#"{"Name":"alice_bofa","Amount":"130"}"#);
}

#[test]
fn underscored_names_do_not_collide() {
    let store = fresh_store();
    // Naively both would persist under "a_b_c".
    initialize(&store, &args(&["a_b", "c", "1"])).unwrap();
    initialize(&store, &args(&["a", "b_c", "2"])).unwrap();

    adjust(&store, &args(&["deposit", "a_b", "10", "c"])).unwrap();

    let left = query(&store, "query", &args(&["a_b", "c"])).unwrap();
    let right = query(&store, "query", &args(&["a", "b_c"])).unwrap();
    let left: serde_json::Value = serde_json::from_slice(&left).unwrap();
    let right: serde_json::Value = serde_json::from_slice(&right).unwrap();
    assert_eq!(left["Amount"], "11");
    assert_eq!(right["Amount"], "2");
}
