use crate::config::toml_config::TomlConfig;
use crate::core::{SettingsProvider, ValidatorSettings};
use crate::utils::error::{CpfError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub parameter: String,
    pub separators: Vec<char>,
    pub reject_repeated_digits: bool,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `CPF_CONFIG` 指向的 TOML 檔作為基礎，其餘環境變數覆蓋檔案內容
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_config = match lookup("CPF_CONFIG") {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(&path)?
            }
            None => TomlConfig::default(),
        };
        let base = file_config.validator_settings();

        let reject_repeated_digits = match lookup("CPF_REJECT_REPEATED") {
            Some(value) => parse_flag("CPF_REJECT_REPEATED", &value)?,
            None => base.reject_repeated_digits,
        };

        Ok(Self {
            parameter: lookup("CPF_PARAMETER")
                .unwrap_or_else(|| file_config.parameter().to_string()),
            // 每個字元都是一個分隔符號，例如 ".-"
            separators: lookup("CPF_SEPARATORS")
                .map(|value| value.chars().collect())
                .unwrap_or(base.separators),
            reject_repeated_digits,
        })
    }
}

fn parse_flag(field: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CpfError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: "Expected a boolean (true/false)".to_string(),
        }),
    }
}

impl SettingsProvider for LambdaConfig {
    fn validator_settings(&self) -> ValidatorSettings {
        ValidatorSettings {
            separators: self.separators.clone(),
            reject_repeated_digits: self.reject_repeated_digits,
        }
    }
}

impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_parameter_name("CPF_PARAMETER", &self.parameter)?;
        validate_separators("CPF_SEPARATORS", &self.separators)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
