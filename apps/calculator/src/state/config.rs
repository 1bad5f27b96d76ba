//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FEE_*`)
//! 2. Config file (`--config <PATH>` or `FEE_CONFIG_FILE`, TOML)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after loading, so no lock is needed.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Smallest statement width that still fits a label and an amount.
const MIN_PAPER_WIDTH: u16 = 32;

/// Widest statement we render.
const MAX_PAPER_WIDTH: u16 = 120;

const DEFAULT_TITLE: &str = "Progressive Scale Real Estate Agent Fee Calculator";

const DEFAULT_INTRO: &str = "This calculator serves both real estate agents and clients by \
enabling fair distribution of profits. The fundamental premise is that the selling price \
alone does not necessarily equate to fair profit sharing for clients, as they could be \
experiencing losses or may have varying expectations. Therefore, these calculations offer \
a novel approach to determining agent commission, ensuring equitable outcomes for all \
parties involved in real estate transactions.";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigState {
    /// Heading shown above the form and on statements
    pub title: String,

    /// Paragraph shown above the form
    pub intro: String,

    /// Prefix for displayed amounts
    pub currency_symbol: String,

    /// Where exported statements go when no directory is given
    pub report_dir: PathBuf,

    /// Statement width in characters
    pub paper_width: u16,

    /// Log a warning when the ratio is outside 0 to 1
    pub warn_on_unusual_ratio: bool,
}

impl Default for ConfigState {
    /// Returns the stock configuration.
    ///
    /// ## Default Values
    /// - Currency: "$"
    /// - Statements: `<data dir>/statements`, 48 characters wide
    /// - Unusual ratio warning: enabled
    fn default() -> Self {
        ConfigState {
            title: DEFAULT_TITLE.to_string(),
            intro: DEFAULT_INTRO.to_string(),
            currency_symbol: "$".to_string(),
            report_dir: default_report_dir(),
            paper_width: 48,
            warn_on_unusual_ratio: true,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

impl ConfigState {
    /// Loads configuration from defaults, an optional TOML file and `FEE_*`
    /// environment variables.
    ///
    /// ## Environment Variables
    /// - `FEE_TITLE`: Override heading
    /// - `FEE_CURRENCY_SYMBOL`: Override currency prefix
    /// - `FEE_REPORT_DIR`: Override statement directory
    /// - `FEE_PAPER_WIDTH`: Override statement width (32 to 120)
    /// - `FEE_WARN_ON_UNUSUAL_RATIO`: `true` / `false`
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_layered(file, None)
    }

    /// Same as [`ConfigState::load`], with `env` standing in for the process
    /// environment when given.
    fn load_layered(
        file: Option<&Path>,
        env: Option<::config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let defaults = ConfigState::default();

        let mut builder = ::config::Config::builder()
            .set_default("title", defaults.title)?
            .set_default("intro", defaults.intro)?
            .set_default("currency_symbol", defaults.currency_symbol)?
            .set_default(
                "report_dir",
                defaults.report_dir.to_string_lossy().into_owned(),
            )?
            .set_default("paper_width", i64::from(defaults.paper_width))?
            .set_default("warn_on_unusual_ratio", defaults.warn_on_unusual_ratio)?;

        if let Some(path) = file {
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        let config: ConfigState = builder
            .add_source(
                ::config::Environment::with_prefix("FEE")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PAPER_WIDTH..=MAX_PAPER_WIDTH).contains(&self.paper_width) {
            return Err(ConfigError::InvalidValue("paper_width".to_string()));
        }

        if self.currency_symbol.chars().count() > 8 {
            return Err(ConfigError::InvalidValue("currency_symbol".to_string()));
        }

        Ok(())
    }

    /// Formats an amount for display.
    ///
    /// The value is shown as computed, with no rounding.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_amount(7000.0), "$7000");
    /// ```
    pub fn format_amount(&self, value: f64) -> String {
        if value < 0.0 {
            format!("-{}{}", self.currency_symbol, -value)
        } else {
            format!("{}{}", self.currency_symbol, value.abs())
        }
    }
}

/// Platform data directory for exported statements.
///
/// - **macOS**: `~/Library/Application Support/com.progressive-fee.calculator/statements`
/// - **Windows**: `%APPDATA%\progressive-fee\calculator\data\statements`
/// - **Linux**: `~/.local/share/calculator/statements`
///
/// Falls back to `./statements` when no home directory is known.
fn default_report_dir() -> PathBuf {
    ProjectDirs::from("com", "progressive-fee", "calculator")
        .map(|dirs| dirs.data_dir().join("statements"))
        .unwrap_or_else(|| PathBuf::from("statements"))
}
