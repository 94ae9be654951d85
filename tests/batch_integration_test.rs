#![cfg(feature = "cli")]

use anyhow::Result;
use cpf_function::{BatchEngine, LocalStorage, Validator, ValidatorSettings};
use tempfile::TempDir;

#[tokio::test]
async fn test_batch_with_header_column() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();

    tokio::fs::write(
        temp_dir.path().join("customers.csv"),
        "name,cpf\nAna,111.444.777-35\nBruno,111.444.777-36\nCarla,123\nDiego,12345678909\n",
    )
    .await?;

    let engine = BatchEngine::new(LocalStorage::new(base), Validator::default());
    let summary = engine.run("customers.csv", "out/report.csv").await?;

    assert_eq!(summary.total, 4);
    assert_eq!(summary.valid, 2);
    assert_eq!(summary.invalid_format, 1);
    assert_eq!(summary.invalid_checksum, 1);

    let report = tokio::fs::read_to_string(temp_dir.path().join("out/report.csv")).await?;
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "cpf,normalized,valid,reason",
            "111.444.777-35,11144477735,true,",
            "111.444.777-36,11144477736,false,invalid-checksum",
            "123,123,false,invalid-format",
            "12345678909,12345678909,true,",
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_batch_with_plain_lines_and_lenient_settings() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();

    tokio::fs::write(
        temp_dir.path().join("cpfs.txt"),
        "11111111111\n11144477735\n",
    )
    .await?;

    let validator = Validator::new(ValidatorSettings {
        reject_repeated_digits: false,
        ..ValidatorSettings::default()
    });
    let engine = BatchEngine::new(LocalStorage::new(base), validator);
    let summary = engine.run("cpfs.txt", "report.csv").await?;

    assert_eq!(summary.total, 2);
    assert_eq!(summary.valid, 2);
    assert_eq!(summary.invalid(), 0);

    Ok(())
}

#[tokio::test]
async fn test_batch_missing_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();

    let engine = BatchEngine::new(LocalStorage::new(base), Validator::default());
    let result = engine.run("missing.csv", "report.csv").await;

    assert!(matches!(result, Err(cpf_function::CpfError::IoError(_))));
    assert!(!temp_dir.path().join("report.csv").exists());

    Ok(())
}
