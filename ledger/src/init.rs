//! Initialize: create an account and its holdings in one invocation.

use multibank_store::LedgerStore;
use multibank_types::{AccountName, Balance, BankName};

use crate::codec;
use crate::error::LedgerError;

/// Create an account's holdings from `[name, bank1, amount1, bank2, amount2, ...]`.
///
/// Every argument is validated before the first write is issued, so a bad
/// amount or empty name leaves the store untouched. The writes themselves
/// are not transactional: a put failure aborts the loop, leaving earlier
/// holdings committed and the bank-list write skipped. Callers must tolerate
/// that partial state or guard against it.
///
/// Negative amounts are accepted and stored verbatim; only the withdraw rule
/// floors balances at zero.
pub fn initialize<S: LedgerStore>(store: &S, args: &[String]) -> Result<(), LedgerError> {
    if args.len() % 2 != 1 {
        return Err(LedgerError::ArgumentCount {
            reason: "expecting an odd number: [name, bank1, amount1, bank2, amount2, ...]",
        });
    }
    if args.len() <= 1 {
        return Err(LedgerError::ArgumentCount {
            reason: "expecting at least 3: a name and one bank/amount pair",
        });
    }

    let account = AccountName::new(args[0].as_str())?;

    // Validate every pair up front; nothing is written until all of them parse.
    let mut holdings: Vec<(BankName, Balance)> = Vec::with_capacity(args.len() / 2);
    for pair in args[1..].chunks_exact(2) {
        let bank = BankName::new(pair[0].as_str())?;
        let amount: Balance = pair[1].parse().map_err(LedgerError::from)?;
        holdings.push((bank, amount));
    }

    let mut banks = Vec::with_capacity(holdings.len());
    for (bank, amount) in &holdings {
        tracing::debug!(account = %account, bank = %bank, amount = %amount, "initializing holding");
        let key = codec::holding_key(&account, bank);
        store
            .put(&key, &codec::encode_balance(*amount))
            .map_err(|source| LedgerError::StoreWrite { key, source })?;
        banks.push(bank.clone());
    }

    // The bank list is written once, here; adjust never maintains it.
    let key = codec::account_key(&account);
    store
        .put(&key, &codec::encode_bank_list(&banks))
        .map_err(|source| LedgerError::StoreWrite { key, source })?;

    Ok(())
}
