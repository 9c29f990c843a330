use crate::domain::ports::{ConfigProvider, OutputFormat};
use crate::utils::error::{IntervalError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

/// 預設的時間戳輸出格式 (RFC 3339，含小數秒與時區)
pub const DEFAULT_TIMESTAMP_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub conversion: ConversionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Assumed unit lengths used when an interval is flattened into a fixed duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    #[serde(default = "default_days_in_month")]
    pub days_in_month: u8,
    #[serde(default = "default_seconds_in_day")]
    pub seconds_in_day: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
    pub timestamp_layout: Option<String>,
}

fn default_days_in_month() -> u8 {
    30
}

fn default_seconds_in_day() -> u32 {
    86_400
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            days_in_month: default_days_in_month(),
            seconds_in_day: default_seconds_in_day(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            timestamp_layout: None,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(IntervalError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DAYS_IN_MONTH})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_range(
            "conversion.days_in_month",
            self.conversion.days_in_month,
            1,
            31,
        )?;
        validation::validate_range(
            "conversion.seconds_in_day",
            self.conversion.seconds_in_day,
            1,
            90_000,
        )?;
        validation::validate_one_of("output.format", &self.output.format, &OutputFormat::VALID)?;
        if let Some(layout) = &self.output.timestamp_layout {
            validation::validate_non_empty_string("output.timestamp_layout", layout)?;
        }
        Ok(())
    }

    /// 取得時間戳輸出格式
    pub fn timestamp_layout(&self) -> &str {
        self.output
            .timestamp_layout
            .as_deref()
            .unwrap_or(DEFAULT_TIMESTAMP_LAYOUT)
    }
}

impl ConfigProvider for TomlConfig {
    fn days_in_month(&self) -> u8 {
        self.conversion.days_in_month
    }

    fn seconds_in_day(&self) -> u32 {
        self.conversion.seconds_in_day
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::from_name(&self.output.format).unwrap_or_default()
    }

    fn timestamp_layout(&self) -> &str {
        TomlConfig::timestamp_layout(self)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
