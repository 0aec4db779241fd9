//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i128) so that budget totals never
//! accumulate floating-point drift. Spreadsheet numbers arrive as `f64` and are
//! rounded to the nearest cent on the way in; arithmetic saturates instead of
//! overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Largest magnitude, in cents, accepted from a spreadsheet number
///
/// Far enough below `i128::MAX` that summing every category cannot saturate.
const MAX_CENTS: f64 = 1e36;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i128);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use dossier::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents as i128)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units as i128 * 100)
    }

    /// Convert a raw spreadsheet number, rounding to the nearest cent
    ///
    /// Returns `None` for NaN, infinities and magnitudes beyond `MAX_CENTS`.
    pub fn from_amount(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();
        if !cents.is_finite() || cents.abs() >= MAX_CENTS {
            return None;
        }
        Some(Self(cents as i128))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i128 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i128 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i128 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount as a plain number, as embedded in the chart data block
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Format with a currency symbol, two decimals and thousands separators
    ///
    /// ```
    /// use dossier::models::Money;
    /// assert_eq!(Money::from_cents(2_038_000).format_with_symbol("$"), "$20,380.00");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let units = group_thousands(self.units().unsigned_abs());
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, units, self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, units, self.cents_part())
        }
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
