//! Display locale.

use serde::{Deserialize, Serialize};

/// Locales supported by the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    En,
    /// French.
    Fr,
}

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const FR_MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Août", "Sep", "Oct", "Nov", "Déc",
];

impl Locale {
    /// Returns the short month name for a 1-based month number.
    ///
    /// Out-of-range months yield `"?"`.
    #[must_use]
    pub fn short_month_name(self, month: u32) -> &'static str {
        let table = match self {
            Self::En => &EN_MONTHS,
            Self::Fr => &FR_MONTHS,
        };
        month
            .checked_sub(1)
            .and_then(|idx| table.get(idx as usize))
            .copied()
            .unwrap_or("?")
    }

    /// Thousands separator.
    #[must_use]
    pub const fn group_separator(self) -> char {
        match self {
            Self::En => ',',
            // narrow no-break space
            Self::Fr => '\u{202f}',
        }
    }

    /// Decimal separator.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::En => '.',
            Self::Fr => ',',
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Fr => write!(f, "fr"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            "fr" | "fr-fr" => Ok(Self::Fr),
            _ => Err(format!("Unknown locale: {s}")),
        }
    }
}
