//! Price type for representing item amounts
//!
//! Internally stores amounts in cents (u64) to avoid floating-point precision
//! issues. Receipt prices are never negative, so parsing rejects signed input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Represents a price stored as cents (hundredths of the currency unit)
///
/// Using u64 cents avoids floating-point precision issues and makes
/// negative amounts unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Create a Price from cents
    ///
    /// # Examples
    /// ```
    /// use receipt_cli::models::Price;
    /// let price = Price::from_cents(350); // $3.50
    /// ```
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create a Price from dollars and cents
    pub const fn from_dollars_cents(dollars: u64, cents: u64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a zero Price
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Get the whole dollars portion
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> u64 {
        self.0 % 100
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse a price from a string
    ///
    /// Accepts formats: "3.50", "$3.50", "3", "3.5". Anything that is not a
    /// plain non-negative decimal amount is rejected, including signed input
    /// and trailing junk ("12x").
    pub fn parse(s: &str) -> Result<Self, PriceParseError> {
        let s = s.trim();

        // Remove currency symbol if present
        let s = s.strip_prefix('$').unwrap_or(s);

        // Parse based on format
        let cents = if s.contains('.') {
            // Decimal format: "3.50"
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(PriceParseError::InvalidFormat(s.to_string()));
            }

            let dollars: u64 = parts[0]
                .parse()
                .map_err(|_| PriceParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate cents to 2 digits
            let cents_str = parts[1];
            let cents: u64 = match cents_str.len() {
                0 => 0,
                1 => {
                    cents_str
                        .parse::<u64>()
                        .map_err(|_| PriceParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => cents_str
                    .get(..2)
                    .ok_or_else(|| PriceParseError::InvalidFormat(s.to_string()))?
                    .parse()
                    .map_err(|_| PriceParseError::InvalidFormat(s.to_string()))?,
            };

            dollars * 100 + cents
        } else {
            // Integer format - assume dollars
            s.parse::<u64>()
                .map_err(|_| PriceParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(cents))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.cents_part())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::zero(), |acc, p| acc + p)
    }
}

/// Error type for price parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    InvalidFormat(String),
}

impl fmt::Display for PriceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceParseError::InvalidFormat(s) => write!(f, "Invalid price format: {}", s),
        }
    }
}

impl std::error::Error for PriceParseError {}
