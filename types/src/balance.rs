//! Holding balance type.
//!
//! Balances are signed fixed-point integers to avoid floating-point errors.
//! Initialize may store any integer verbatim, including negative ones; the
//! withdraw rule is the only place a floor is applied.

use crate::error::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The balance of one holding, in whole units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Balance(i64);

impl Balance {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add a deposit to this balance, saturating at the integer bounds.
    pub fn deposit(self, amount: Self) -> Self {
        Self(self.0.saturating_add(amount.0))
    }

    /// Withdraw with the floor-at-zero rule: if the remainder would not be
    /// strictly positive, the balance lands at exactly zero. Withdrawing the
    /// full balance therefore also yields zero, and no insufficient-funds
    /// condition exists.
    pub fn withdraw_floored(self, amount: Self) -> Self {
        let remaining = self.0.saturating_sub(amount.0);
        if remaining > 0 {
            Self(remaining)
        } else {
            Self::ZERO
        }
    }
}

impl FromStr for Balance {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self).map_err(|_| TypeError::InvalidAmount {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
