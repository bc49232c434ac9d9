//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::locale::Locale;

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g., francs, euros).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// West African CFA franc
    Xof,
    /// Euro
    Eur,
    /// US Dollar
    Usd,
}

impl Currency {
    /// Number of digits shown after the decimal separator.
    #[must_use]
    pub const fn minor_units(self) -> u32 {
        match self {
            Self::Xof => 0,
            Self::Eur | Self::Usd => 2,
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Xof => "F CFA",
            Self::Eur => "€",
            Self::Usd => "$",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Formats the amount for display in the given locale.
    ///
    /// `fr` places the symbol after the number (`1 234 F CFA`, `12,50 €`);
    /// `en` places it before (`$1,234.50`, `F CFA 1,234`).
    #[must_use]
    pub fn display(&self, locale: Locale) -> String {
        let digits = self.currency.minor_units();
        let mut rounded = self
            .amount
            .abs()
            .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(digits);

        let text = rounded.to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (text.as_str(), None),
        };

        let mut number = group_thousands(int_part, locale.group_separator());
        if let Some(frac) = frac_part {
            number.push(locale.decimal_separator());
            number.push_str(frac);
        }

        let sign = if self.is_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let symbol = self.currency.symbol();

        match locale {
            Locale::Fr => format!("{sign}{number}\u{202f}{symbol}"),
            Locale::En if symbol.chars().count() > 1 => format!("{sign}{symbol} {number}"),
            Locale::En => format!("{sign}{symbol}{number}"),
        }
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xof => write!(f, "XOF"),
            Self::Eur => write!(f, "EUR"),
            Self::Usd => write!(f, "USD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "XOF" => Ok(Self::Xof),
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
