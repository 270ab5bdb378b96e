use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Unsigned money amount in **whole naira**.
///
/// Transfers and airtime purchases are always whole, positive amounts; the
/// validator rejects fractions before an `Amount` is ever built.
///
/// # Examples
///
/// ```rust
/// use engine::Amount;
///
/// let amount = Amount::new(150_000);
/// assert_eq!(amount.to_string(), "₦150,000");
/// assert_eq!("5000".parse::<Amount>().unwrap(), Amount::new(5000));
/// assert!("12.5".parse::<Amount>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Fixed single-transaction ceiling enforced after the PIN step.
    pub const SINGLE_TRANSACTION_CEILING: Amount = Amount(100_000);

    #[must_use]
    pub const fn new(naira: u64) -> Self {
        Self(naira)
    }

    #[must_use]
    pub const fn naira(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// Groups digits in thousands: `1234567` -> `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₦{}", group_thousands(self.0))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Amount> for u64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAmountError(String);

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseAmountError {}

impl FromStr for Amount {
    type Err = ParseAmountError;

    /// Parses a whole-naira amount. Accepts an optional leading `₦` and
    /// thousands separators (`,`), rejects signs and fractions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let raw = raw.strip_prefix('₦').unwrap_or(raw).trim_start();
        if raw.is_empty() {
            return Err(ParseAmountError("empty amount".to_string()));
        }

        let mut total: u64 = 0;
        for ch in raw.chars() {
            if ch == ',' {
                continue;
            }
            let digit = ch
                .to_digit(10)
                .ok_or_else(|| ParseAmountError(format!("invalid character {ch:?}")))?;
            total = total
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(digit)))
                .ok_or_else(|| ParseAmountError("amount overflow".to_string()))?;
        }
        Ok(Amount(total))
    }
}
