// Application layer: the CLI flow shared by the binary and its tests.

use crate::config::toml_config::TomlConfig;
use crate::config::{cli::LocalStorage, CliConfig, OutputFormat};
use crate::core::batch::BatchEngine;
use crate::core::cpf::Validator;
use crate::core::SettingsProvider;
use crate::utils::error::{CpfError, ErrorSeverity, Result};
use crate::utils::validation::Validate;
use std::io::Write;

/// 至少一個號碼無效時的退出碼
pub const EXIT_INVALID: i32 = 4;

/// 回傳 true 代表所有號碼都有效
pub async fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<bool> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            Some(file_config)
        }
        None => None,
    };

    // 命令列參數優先於設定檔
    let validator = match &file_config {
        Some(file_config) => Validator::new(config.overrides(file_config.validator_settings())),
        None => Validator::from_provider(config),
    };

    let input = config
        .input
        .as_deref()
        .or_else(|| file_config.as_ref().and_then(|c| c.batch_input()));
    if input.is_none() && config.cpfs.is_empty() {
        return Err(CpfError::MissingConfigError {
            field: "CPF values, --input or batch.input".to_string(),
        });
    }

    let mut all_valid = true;
    if let Some(input) = input {
        let output = config
            .output
            .as_deref()
            .or_else(|| file_config.as_ref().and_then(|c| c.batch_output()))
            .unwrap_or(CliConfig::DEFAULT_OUTPUT);

        let engine = BatchEngine::new(LocalStorage::new(".".to_string()), validator.clone());
        let summary = engine.run(input, output).await?;

        match config.format {
            OutputFormat::Text => {
                writeln!(
                    out,
                    "✅ {} valid, ❌ {} invalid format, ❌ {} invalid checksum ({} total)",
                    summary.valid, summary.invalid_format, summary.invalid_checksum, summary.total
                )?;
                writeln!(out, "📁 Report saved to: {}", output)?;
            }
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&summary)?)?,
        }
        all_valid &= summary.invalid() == 0;
    }

    for raw in &config.cpfs {
        let verdict = validator.verdict(raw);
        all_valid &= verdict.valid;

        match config.format {
            OutputFormat::Text => match (&verdict.formatted, verdict.region, verdict.reason) {
                (Some(formatted), Some(region), _) => writeln!(
                    out,
                    "✅ {} valid (fiscal region: {})",
                    formatted,
                    region.join(", ")
                )?,
                (_, _, Some(reason)) => writeln!(out, "❌ {} {}", raw, reason.code())?,
                _ => writeln!(out, "❌ {}", raw)?,
            },
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&verdict)?)?,
        }
    }

    Ok(all_valid)
}

/// 根據結果與錯誤嚴重程度決定退出碼
pub fn exit_code(outcome: &Result<bool>) -> i32 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => EXIT_INVALID,
        Err(e) => match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&Ok(true)), 0);
        assert_eq!(exit_code(&Ok(false)), EXIT_INVALID);
        assert_eq!(
            exit_code(&Err(CpfError::MissingConfigError {
                field: "cpf".to_string()
            })),
            1
        );
        assert_eq!(
            exit_code(&Err(CpfError::ProcessingError {
                message: "empty".to_string()
            })),
            2
        );
        assert_eq!(
            exit_code(&Err(CpfError::IoError(std::io::Error::other("disk")))),
            3
        );
    }

    #[tokio::test]
    async fn test_text_output() {
        let config = CliConfig::parse_from(["cpf-function", "111.444.777-35", "111.444.777-36"]);
        let mut out = Vec::new();

        let outcome = run(&config, &mut out).await;
        let printed = String::from_utf8(out).unwrap();

        assert_eq!(exit_code(&outcome), EXIT_INVALID);
        assert_eq!(
            printed,
            "✅ 111.444.777-35 valid (fiscal region: ES, RJ)\n❌ 111.444.777-36 invalid-checksum\n"
        );
    }
}
