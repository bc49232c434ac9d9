//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::{Currency, Locale};

/// Largest trailing window the dashboard chart accepts.
pub const MAX_WINDOW_MONTHS: u32 = 36;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dashboard aggregation settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Dashboard aggregation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Number of calendar months in the revenue/expense chart.
    #[serde(default = "default_window_months")]
    pub window_months: u32,
}

fn default_window_months() -> u32 {
    6
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_months: default_window_months(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Locale for month labels, number formatting and report wording.
    #[serde(default = "default_locale")]
    pub locale: Locale,
    /// Currency amounts are shown in.
    #[serde(default = "default_currency")]
    pub currency: Currency,
}

fn default_locale() -> Locale {
    Locale::Fr
}

fn default_currency() -> Currency {
    Currency::Xof
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            currency: default_currency(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("BIZDASH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but make no sense.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if the chart window is out of range.
    pub fn validate(&self) -> AppResult<()> {
        let window = self.dashboard.window_months;
        if window == 0 || window > MAX_WINDOW_MONTHS {
            return Err(AppError::Configuration(format!(
                "dashboard.window_months must be between 1 and {MAX_WINDOW_MONTHS}, got {window}"
            )));
        }
        Ok(())
    }
}
