use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// Account identifier exactly as the caller supplied it, before validation.
///
/// Untyped sources (JSON order files, form fields) can hand over any of
/// these shapes, so the purchase flow accepts all of them and rejects the
/// ones that are not a positive integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAccountId {
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for RawAccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAccountId::Integer(n) => write!(f, "{}", n),
            RawAccountId::Unsigned(n) => write!(f, "{}", n),
            RawAccountId::Decimal(x) => write!(f, "{}", x),
            RawAccountId::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for RawAccountId {
    fn from(value: i64) -> Self {
        RawAccountId::Integer(value)
    }
}

impl From<i32> for RawAccountId {
    fn from(value: i32) -> Self {
        RawAccountId::Integer(value.into())
    }
}

impl From<u32> for RawAccountId {
    fn from(value: u32) -> Self {
        RawAccountId::Integer(value.into())
    }
}

impl From<u64> for RawAccountId {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => RawAccountId::Integer(n),
            Err(_) => RawAccountId::Unsigned(value),
        }
    }
}

impl From<f64> for RawAccountId {
    fn from(value: f64) -> Self {
        RawAccountId::Decimal(value)
    }
}

impl From<&str> for RawAccountId {
    fn from(value: &str) -> Self {
        RawAccountId::Text(value.to_string())
    }
}

impl From<String> for RawAccountId {
    fn from(value: String) -> Self {
        RawAccountId::Text(value)
    }
}

impl From<AccountId> for RawAccountId {
    fn from(value: AccountId) -> Self {
        RawAccountId::from(value.get())
    }
}

/// A validated, strictly positive account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct AccountId(NonZeroU64);

impl AccountId {
    pub fn new(value: u64) -> Result<Self, AccountIdError> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or_else(|| AccountIdError::NotPositiveInteger(RawAccountId::from(value)))
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for AccountId {
    type Error = AccountIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for u64 {
    fn from(value: AccountId) -> Self {
        value.get()
    }
}

impl TryFrom<RawAccountId> for AccountId {
    type Error = AccountIdError;

    fn try_from(raw: RawAccountId) -> Result<Self, Self::Error> {
        let value = match &raw {
            RawAccountId::Integer(n) => u64::try_from(*n).ok(),
            RawAccountId::Unsigned(n) => Some(*n),
            // Integral decimals such as `7.0` are still integers.
            RawAccountId::Decimal(x) => {
                if x.is_finite() && x.fract() == 0.0 && *x >= 1.0 && *x < u64::MAX as f64 {
                    Some(*x as u64)
                } else {
                    None
                }
            }
            RawAccountId::Text(_) => None,
        };

        value
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or(AccountIdError::NotPositiveInteger(raw))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccountIdError {
    #[error("account id must be a positive integer, got {0}")]
    NotPositiveInteger(RawAccountId),
}
