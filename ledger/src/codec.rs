//! Key derivation and value encodings for the persisted layout.
//!
//! Layout: the account key is the account name itself and stores the
//! comma-joined bank list; a holding key is the underscore-joined
//! (account, bank) pair and stores the balance as a decimal string.
//!
//! The join escapes `_` and `\` inside each component so that distinct
//! (account, bank) pairs can never derive the same key. Names free of both
//! characters keep the legacy `<account>_<bank>` form byte-for-byte.

use crate::error::LedgerError;
use multibank_types::{AccountName, Balance, BankName};

const SEPARATOR: char = '_';
const ESCAPE: char = '\\';

/// Key under which an account's bank list is stored.
pub fn account_key(account: &AccountName) -> String {
    account.as_str().to_string()
}

/// Key under which one (account, bank) holding is stored.
pub fn holding_key(account: &AccountName, bank: &BankName) -> String {
    let mut key = String::with_capacity(account.as_str().len() + bank.as_str().len() + 1);
    escape_into(account.as_str(), &mut key);
    key.push(SEPARATOR);
    escape_into(bank.as_str(), &mut key);
    key
}

fn escape_into(component: &str, out: &mut String) {
    for c in component.chars() {
        if c == SEPARATOR || c == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(c);
    }
}

/// Encode a balance as its decimal string, no surrounding whitespace.
pub fn encode_balance(balance: Balance) -> Vec<u8> {
    balance.to_string().into_bytes()
}

/// Decode a stored balance. Distinguishes a malformed value from an absent
/// one: absence is the caller's concern, malformation is reported here.
pub fn decode_balance(key: &str, value: &[u8]) -> Result<Balance, LedgerError> {
    let text = std::str::from_utf8(value).map_err(|_| LedgerError::MalformedValue {
        key: key.to_string(),
        reason: "value is not valid UTF-8".to_string(),
    })?;
    text.parse().map_err(|_| LedgerError::MalformedValue {
        key: key.to_string(),
        reason: format!("{text:?} is not a base-10 integer"),
    })
}

/// Encode a bank list as comma-joined names, in the order supplied.
/// Duplicates are kept; the list is a cached index, not a set.
pub fn encode_bank_list(banks: &[BankName]) -> Vec<u8> {
    let mut out = String::new();
    for (i, bank) in banks.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(bank.as_str());
    }
    out.into_bytes()
}

/// Decode a stored bank list.
pub fn decode_bank_list(key: &str, value: &[u8]) -> Result<Vec<BankName>, LedgerError> {
    let text = std::str::from_utf8(value).map_err(|_| LedgerError::MalformedValue {
        key: key.to_string(),
        reason: "value is not valid UTF-8".to_string(),
    })?;
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|name| BankName::new(name).map_err(LedgerError::from))
        .collect()
}
