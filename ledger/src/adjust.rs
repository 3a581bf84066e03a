//! Adjust: deposit into or withdraw from a single holding.

use multibank_store::LedgerStore;
use multibank_types::{AccountName, Balance, BankName};

use crate::codec;
use crate::error::LedgerError;

/// Apply `[method, account, amount, bank]` to one holding.
///
/// The argument order is inherited from the wire contract: the bank name
/// comes last and the account second. Methods are `"deposit"` and
/// `"withdraw"`; anything else is rejected.
///
/// Withdrawals floor at zero: a withdrawal that meets or exceeds the current
/// balance leaves exactly 0, and no insufficient-funds error is raised.
///
/// Adjust never creates holdings. A key that was never initialized is a
/// `NotFound` error, and a stored value that does not parse as a decimal
/// integer is `MalformedValue` — neither silently defaults to zero.
pub fn adjust<S: LedgerStore>(store: &S, args: &[String]) -> Result<(), LedgerError> {
    if args.len() != 4 {
        return Err(LedgerError::ArgumentCount {
            reason: "expecting 4: [method, account, amount, bank]",
        });
    }

    let method = args[0].as_str();
    let account = AccountName::new(args[1].as_str())?;
    let amount: Balance = args[2].parse().map_err(LedgerError::from)?;
    let bank = BankName::new(args[3].as_str())?;

    let key = codec::holding_key(&account, &bank);
    let stored = store
        .get(&key)
        .map_err(|source| LedgerError::StoreRead {
            key: key.clone(),
            source,
        })?
        .ok_or_else(|| LedgerError::NotFound { key: key.clone() })?;
    let current = codec::decode_balance(&key, &stored)?;

    let updated = match method {
        "deposit" => current.deposit(amount),
        "withdraw" => current.withdraw_floored(amount),
        other => {
            return Err(LedgerError::UnknownMethod {
                got: other.to_string(),
            })
        }
    };

    tracing::debug!(%key, %current, %updated, "holding adjusted");
    store
        .put(&key, &codec::encode_balance(updated))
        .map_err(|source| LedgerError::StoreWrite { key, source })
}
