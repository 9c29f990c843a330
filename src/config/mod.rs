#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

use crate::domain::ports::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::Path;
use toml_config::TomlConfig;

/// Settings after merging the optional TOML file with command line overrides.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub days_in_month: u8,
    pub seconds_in_day: u32,
    pub output_format: OutputFormat,
    pub timestamp_layout: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::from_toml(&TomlConfig::default())
    }
}

impl ResolvedConfig {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            days_in_month: config.days_in_month(),
            seconds_in_day: config.seconds_in_day(),
            output_format: config.output_format(),
            timestamp_layout: config.timestamp_layout().to_string(),
        }
    }

    /// 載入配置檔 (若有指定) 並驗證
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file_config = match path {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        file_config.validate()?;
        Ok(Self::from_toml(&file_config))
    }

    /// 套用命令列覆蓋設定
    pub fn with_overrides(
        mut self,
        days_in_month: Option<u8>,
        seconds_in_day: Option<u32>,
        json: bool,
    ) -> Self {
        if let Some(days) = days_in_month {
            tracing::debug!("days_in_month overridden to {}", days);
            self.days_in_month = days;
        }
        if let Some(seconds) = seconds_in_day {
            tracing::debug!("seconds_in_day overridden to {}", seconds);
            self.seconds_in_day = seconds;
        }
        if json {
            self.output_format = OutputFormat::Json;
        }
        self
    }
}

impl ConfigProvider for ResolvedConfig {
    fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    fn seconds_in_day(&self) -> u32 {
        self.seconds_in_day
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn timestamp_layout(&self) -> &str {
        &self.timestamp_layout
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range("days_in_month", self.days_in_month, 1, 31)?;
        validation::validate_range("seconds_in_day", self.seconds_in_day, 1, 90_000)?;
        validation::validate_non_empty_string("timestamp_layout", &self.timestamp_layout)
    }
}
