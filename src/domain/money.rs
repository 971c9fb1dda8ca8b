use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// Exclusive upper bound for a single amount and for any ledger total: 10^26.
/// Below it a value always keeps two fractional digits within Decimal's 28-digit precision.
pub const MAX_AMOUNT: Decimal =
    Decimal::from_parts(0xE400_0000, 0xDCC8_0CD2, 0x0052_B7D2, false, 0);

/// A strictly positive amount of money, below [`MAX_AMOUNT`].
///
/// Amounts are exact decimals rather than floats, so totals and per-category
/// totals always add up to the same value. The only way to build one is
/// through [`Amount::new`] or parsing, both of which enforce the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, ParseAmountError> {
        if value <= Decimal::ZERO {
            return Err(ParseAmountError::NotPositive);
        }
        if value >= MAX_AMOUNT {
            return Err(ParseAmountError::TooLarge);
        }
        Ok(Self(value))
    }

    pub fn value(self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    /// Parse user input into an amount.
    /// Example: "15" -> 15, " 12.50 " -> 12.50, "1e3" -> 1000
    ///
    /// Anything that reads as a real number gets a range error rather than
    /// `NotNumeric`: `1e30` is too large, `1e-40` is too small.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let approx: f64 = input.parse().map_err(|_| ParseAmountError::NotNumeric)?;

        let unsigned = input.trim_start_matches(['+', '-']);
        if !approx.is_finite() {
            // "inf" and "nan" are words, "1e400" is a number that overflowed f64
            return match unsigned.chars().next() {
                Some(c) if c.is_ascii_digit() || c == '.' => Err(ParseAmountError::TooLarge),
                _ => Err(ParseAmountError::NotNumeric),
            };
        }

        let mantissa = unsigned.split(['e', 'E']).next().unwrap_or_default();
        if input.starts_with('-') || !mantissa.chars().any(|c| matches!(c, '1'..='9')) {
            return Err(ParseAmountError::NotPositive);
        }

        let value = match Decimal::from_str(input).or_else(|_| Decimal::from_scientific(input)) {
            Ok(value) => value,
            Err(_) if approx.abs() >= 1.0 => {
                Decimal::from_f64(approx).ok_or(ParseAmountError::TooLarge)?
            }
            Err(_) => Decimal::from_f64(approx).unwrap_or(Decimal::ZERO),
        };

        // Positive input that rounds away at 28 decimal places
        if value.is_zero() {
            return Err(ParseAmountError::TooSmall);
        }
        Self::new(value)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_amount(self.0))
    }
}

/// Format a decimal with exactly two fractional digits.
/// Example: 15 -> "15.00", 19.75 -> "19.75", 0.125 -> "0.12"
///
/// Values must be below [`MAX_AMOUNT`]; above it Decimal has no room for the cents.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded.to_string()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("Invalid amount. Please enter a numeric value.")]
    NotNumeric,

    #[error("Amount must be greater than 0. Please try again.")]
    NotPositive,

    #[error("Amount is too large. Please enter a value below 100000000000000000000000000.")]
    TooLarge,

    #[error(
        "Amount is too small to record. Please enter at least 0.0000000000000000000000000001."
    )]
    TooSmall,
}
