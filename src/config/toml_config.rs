use crate::core::{SettingsProvider, ValidatorSettings};
use crate::domain::model::DEFAULT_SEPARATORS;
use crate::utils::error::{CpfError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub validator: Option<ValidatorSection>,
    pub gateway: Option<GatewaySection>,
    pub batch: Option<BatchSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorSection {
    pub separators: Option<Vec<char>>,
    pub reject_repeated_digits: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySection {
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSection {
    pub input: Option<String>,
    pub output: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${CPF_PARAMETER})，找不到時保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CpfError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn parameter(&self) -> &str {
        self.gateway
            .as_ref()
            .and_then(|g| g.parameter.as_deref())
            .unwrap_or("cpf")
    }

    pub fn batch_input(&self) -> Option<&str> {
        self.batch.as_ref().and_then(|b| b.input.as_deref())
    }

    pub fn batch_output(&self) -> Option<&str> {
        self.batch.as_ref().and_then(|b| b.output.as_deref())
    }
}

impl SettingsProvider for TomlConfig {
    fn validator_settings(&self) -> ValidatorSettings {
        let section = self.validator.as_ref();
        ValidatorSettings {
            separators: section
                .and_then(|v| v.separators.clone())
                .unwrap_or_else(|| DEFAULT_SEPARATORS.to_vec()),
            reject_repeated_digits: section
                .and_then(|v| v.reject_repeated_digits)
                .unwrap_or(true),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_separators(
            "validator.separators",
            &self.validator_settings().separators,
        )?;
        validate_parameter_name("gateway.parameter", self.parameter())?;

        if let Some(batch) = &self.batch {
            if let Some(input) = &batch.input {
                validate_path("batch.input", input)?;
                let output = validate_required_field("batch.output", &batch.output)?;
                validate_path("batch.output", output)?;
            }
        }

        Ok(())
    }
}
