use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::{
    errors::{BudgetError, Result},
    utils::{ensure_dir, PathResolver},
};
use crate::currency::{
    self, CurrencyCode, CurrencyDisplay, DateFormatStyle, FormatOptions, LocaleConfig,
    NegativeStyle,
};
use crate::storage::{
    json_backend::{tmp_path, write_atomic},
    CorruptDataPolicy,
};

/// Stores user preferences: display formatting and where data lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub date_format: DateFormatStyle,
    #[serde(default)]
    pub currency_display: CurrencyDisplay,
    #[serde(default)]
    pub negative_style: NegativeStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the transactions file.
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub on_corrupt: CorruptDataPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            date_format: DateFormatStyle::default(),
            currency_display: CurrencyDisplay::default(),
            negative_style: NegativeStyle::default(),
            data_dir: None,
            on_corrupt: CorruptDataPolicy::default(),
        }
    }
}

impl Config {
    pub fn resolve_data_dir(&self) -> PathBuf {
        PathResolver::resolve_base(self.data_dir.clone())
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig {
            date_format: self.date_format,
            ..LocaleConfig::for_tag(&self.locale)
        }
    }

    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(self.currency.clone())
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            currency_display: self.currency_display,
            negative_style: self.negative_style,
        }
    }

    pub fn format_amount(&self, amount: f64) -> String {
        currency::format_currency(
            amount,
            &self.currency_code(),
            &self.locale_config(),
            &self.format_options(),
        )
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        currency::format_date(&self.locale_config(), date)
    }
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&PathResolver::config_dir_in(&base))?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Reads the stored config, falling back to defaults when none exists.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            BudgetError::ConfigError(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| BudgetError::ConfigError(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
