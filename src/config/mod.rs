#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::core::ConfigProvider;
use crate::domain::model::GenerationConfig;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use std::path::Path;
use toml_config::{is_unresolved, TomlConfig};

pub const DEFAULT_CONFIG_FILE: &str = "gemini-studio.toml";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// 命令列上可覆蓋的設定
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub max_output_tokens: Option<u32>,
    pub timeout_seconds: Option<u64>,
    pub output_dir: Option<String>,
}

/// 合併後的最終設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
    pub generation: GenerationConfig,
    pub output_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            generation: GenerationConfig::default(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

impl Settings {
    /// 優先順序: 命令列 > 設定檔 > 環境變數 (僅 API key) > 預設值
    pub fn merge(file: TomlConfig, overrides: Overrides, env_api_key: Option<String>) -> Self {
        let defaults = Settings::default();
        let file_api_key = file.api.api_key.filter(|key| !is_unresolved(key));

        let generation = GenerationConfig {
            temperature: overrides
                .temperature
                .or(file.generation.temperature)
                .unwrap_or(defaults.generation.temperature),
            top_p: overrides
                .top_p
                .or(file.generation.top_p)
                .unwrap_or(defaults.generation.top_p),
            max_output_tokens: overrides
                .max_output_tokens
                .or(file.generation.max_output_tokens)
                .unwrap_or(defaults.generation.max_output_tokens),
            response_mime_type: file
                .generation
                .response_mime_type
                .unwrap_or(defaults.generation.response_mime_type),
        };

        Self {
            base_url: overrides
                .base_url
                .or(file.api.base_url)
                .unwrap_or(defaults.base_url),
            api_key: overrides
                .api_key
                .or(file_api_key)
                .or(env_api_key)
                .filter(|key| !key.trim().is_empty()),
            model: overrides.model.or(file.api.model).unwrap_or(defaults.model),
            timeout_seconds: overrides
                .timeout_seconds
                .or(file.api.timeout_seconds)
                .unwrap_or(defaults.timeout_seconds),
            generation,
            output_dir: overrides
                .output_dir
                .or(file.output.directory)
                .unwrap_or(defaults.output_dir),
        }
    }

    /// 指定的設定檔必須存在; 沒指定時才嘗試預設檔名
    pub fn load(config_path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let file = match config_path {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?
            }
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                tracing::info!("📁 Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                TomlConfig::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => {
                tracing::debug!("No configuration file, using defaults");
                TomlConfig::default()
            }
        };

        Ok(Self::merge(file, overrides, std::env::var(API_KEY_ENV).ok()))
    }
}

#[cfg(feature = "cli")]
impl From<&cli::CliConfig> for Overrides {
    fn from(cli: &cli::CliConfig) -> Self {
        Self {
            api_key: cli.api_key.clone(),
            base_url: cli.base_url.clone(),
            model: cli.model.clone(),
            temperature: cli.temperature,
            top_p: cli.top_p,
            max_output_tokens: cli.max_output_tokens,
            timeout_seconds: cli.timeout_seconds,
            output_dir: cli.output_dir.clone(),
        }
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn generation(&self) -> &GenerationConfig {
        &self.generation
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        validate_non_empty_string("api.model", &self.model)?;
        validate_range("api.timeout_seconds", self.timeout_seconds, 1, 600)?;
        validate_range("generation.temperature", self.generation.temperature, 0.0, 2.0)?;
        validate_range("generation.top_p", self.generation.top_p, 0.0, 1.0)?;
        validate_positive_number(
            "generation.max_output_tokens",
            self.generation.max_output_tokens,
            1,
        )?;
        validate_non_empty_string(
            "generation.response_mime_type",
            &self.generation.response_mime_type,
        )?;
        Ok(())
    }
}
