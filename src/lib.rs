pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig, OutputFormat};

pub use crate::adapters::gateway::{GatewayRequest, GatewayResponse};
pub use crate::config::{lambda::LambdaConfig, toml_config::TomlConfig};
pub use crate::core::batch::{BatchEngine, BatchSummary};
pub use crate::core::cpf::{validate, Validator};
pub use crate::domain::model::{Cpf, FiscalRegion, ValidatorSettings, Verdict};
pub use crate::utils::error::{CpfError, Result, ValidationFailure};
