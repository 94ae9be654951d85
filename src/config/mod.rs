#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{SettingsProvider, ValidatorSettings};
#[cfg(feature = "cli")]
use crate::utils::error::{CpfError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cpf-function")]
#[command(about = "Validate Brazilian CPF numbers")]
pub struct CliConfig {
    /// CPF values to validate (separators such as '.' and '-' are allowed)
    #[arg(value_name = "CPF")]
    pub cpfs: Vec<String>,

    /// CSV or line-delimited file of CPF values to validate in batch
    #[arg(long)]
    pub input: Option<String>,

    /// Where the batch report is written
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Characters stripped before validation, comma separated
    #[arg(long, value_delimiter = ',')]
    pub separators: Option<Vec<char>>,

    /// Accept repeated-digit numbers such as 111.111.111-11
    #[arg(long)]
    pub lenient: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub const DEFAULT_OUTPUT: &'static str = "cpf-report.csv";

    /// 命令列參數覆蓋設定檔 (或預設值)
    pub fn overrides(&self, base: ValidatorSettings) -> ValidatorSettings {
        ValidatorSettings {
            separators: self.separators.clone().unwrap_or(base.separators),
            reject_repeated_digits: base.reject_repeated_digits && !self.lenient,
        }
    }

    pub fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(Self::DEFAULT_OUTPUT)
    }
}

#[cfg(feature = "cli")]
impl SettingsProvider for CliConfig {
    fn validator_settings(&self) -> ValidatorSettings {
        self.overrides(ValidatorSettings::default())
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        if self.cpfs.is_empty() && self.input.is_none() && self.config.is_none() {
            return Err(CpfError::MissingConfigError {
                field: "CPF values or --input".to_string(),
            });
        }

        if let Some(input) = &self.input {
            validate_path("input", input)?;
            validate_path("output", self.output_path())?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(separators) = &self.separators {
            validate_separators("separators", separators)?;
        }

        Ok(())
    }
}
