//! Operation-name routing for the external dispatcher.
//!
//! The transport that delivers invocations is an external collaborator; it
//! hands this module an operation name and an already-tokenized argument
//! list.

use multibank_store::LedgerStore;

use crate::adjust::adjust;
use crate::error::LedgerError;
use crate::init::initialize;
use crate::query::query;

/// Route `function` to the matching operation.
///
/// `"init"` creates an account's holdings, `"invoke"` adjusts one holding,
/// `"query"` reads state and returns a payload. Unknown names are rejected
/// rather than silently ignored.
pub fn run<S: LedgerStore>(
    store: &S,
    function: &str,
    args: &[String],
) -> Result<Option<Vec<u8>>, LedgerError> {
    match function {
        "init" => initialize(store, args).map(|()| None),
        "invoke" => adjust(store, args).map(|()| None),
        "query" => query(store, function, args).map(Some),
        other => Err(LedgerError::InvalidFunction {
            got: other.to_string(),
        }),
    }
}
