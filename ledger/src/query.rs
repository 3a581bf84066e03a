//! Query: read the bank list or a single balance.

use multibank_store::LedgerStore;
use multibank_types::{AccountName, BankName};

use crate::codec;
use crate::error::LedgerError;
use crate::response::QueryResponse;

/// Read state for an account.
///
/// `function` must be `"query"`. One argument queries the account's bank
/// list, two arguments query the balance of one holding. The payload is
/// `{"Name": key, "List": value}` or `{"Name": key, "Amount": value}`.
pub fn query<S: LedgerStore>(
    store: &S,
    function: &str,
    args: &[String],
) -> Result<Vec<u8>, LedgerError> {
    if function != "query" {
        return Err(LedgerError::InvalidFunction {
            got: function.to_string(),
        });
    }

    let (key, wants_amount) = match args {
        [account] => {
            let account = AccountName::new(account.as_str())?;
            (codec::account_key(&account), false)
        }
        [account, bank] => {
            let account = AccountName::new(account.as_str())?;
            let bank = BankName::new(bank.as_str())?;
            (codec::holding_key(&account, &bank), true)
        }
        _ => {
            return Err(LedgerError::ArgumentCount {
                reason: "expecting the account name, optionally followed by a bank name",
            })
        }
    };

    let value = store
        .get(&key)
        .map_err(|source| LedgerError::StoreRead {
            key: key.clone(),
            source,
        })?
        .ok_or_else(|| LedgerError::NotFound { key: key.clone() })?;

    let text = String::from_utf8(value).map_err(|_| LedgerError::MalformedValue {
        key: key.clone(),
        reason: "value is not valid UTF-8".to_string(),
    })?;

    let response = if wants_amount {
        QueryResponse::amount(key, text)
    } else {
        QueryResponse::list(key, text)
    };
    let payload = serde_json::to_vec(&response)?;
    tracing::debug!(response = %String::from_utf8_lossy(&payload), "query response");
    Ok(payload)
}
