use crate::core::cpf::Validator;
use crate::core::Storage;
use crate::utils::error::{CpfError, Result, ValidationFailure};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRow {
    pub cpf: String,
    pub normalized: String,
    pub valid: bool,
    pub reason: Option<ValidationFailure>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid_format: usize,
    pub invalid_checksum: usize,
}

impl BatchSummary {
    pub fn invalid(&self) -> usize {
        self.invalid_format + self.invalid_checksum
    }

    fn record(&mut self, row: &BatchRow) {
        self.total += 1;
        match row.reason {
            None => self.valid += 1,
            Some(ValidationFailure::InvalidFormat) => self.invalid_format += 1,
            Some(ValidationFailure::InvalidChecksum) => self.invalid_checksum += 1,
        }
    }
}

pub struct BatchEngine<S: Storage> {
    storage: S,
    validator: Validator,
}

impl<S: Storage> BatchEngine<S> {
    pub fn new(storage: S, validator: Validator) -> Self {
        Self { storage, validator }
    }

    pub async fn run(&self, input: &str, output: &str) -> Result<BatchSummary> {
        tracing::info!("📥 Reading CPF values from {}", input);
        let data = self.storage.read_file(input).await?;
        let candidates = parse_candidates(&data)?;
        tracing::info!("Read {} CPF values", candidates.len());

        let rows = self.validate_all(candidates);
        let mut summary = BatchSummary::default();
        for row in &rows {
            summary.record(row);
        }

        let report = write_report(&rows)?;
        self.storage.write_file(output, &report).await?;

        tracing::info!(
            "📁 Report saved to {} ({} valid, {} invalid)",
            output,
            summary.valid,
            summary.invalid()
        );
        Ok(summary)
    }

    pub fn validate_all(&self, candidates: Vec<String>) -> Vec<BatchRow> {
        candidates
            .into_iter()
            .map(|cpf| {
                let normalized = self.validator.normalize(&cpf);
                let outcome = self.validator.validate(&cpf);
                BatchRow {
                    cpf,
                    normalized,
                    valid: outcome.is_ok(),
                    reason: outcome.err(),
                }
            })
            .collect()
    }
}

/// 支援兩種輸入：含 `cpf` 標題欄的 CSV，或每行一個號碼
pub fn parse_candidates(data: &[u8]) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut records = reader.records();
    let first = match records.next() {
        Some(record) => record?,
        None => {
            return Err(CpfError::ProcessingError {
                message: "input contains no CPF values".to_string(),
            })
        }
    };

    let header_column = first
        .iter()
        .position(|field| field.eq_ignore_ascii_case("cpf"));

    let column = header_column.unwrap_or(0);
    let mut candidates = Vec::new();
    if header_column.is_none() {
        push_field(&mut candidates, &first, column);
    }

    for record in records {
        push_field(&mut candidates, &record?, column);
    }

    if candidates.is_empty() {
        return Err(CpfError::ProcessingError {
            message: "input contains no CPF values".to_string(),
        });
    }
    Ok(candidates)
}

fn push_field(candidates: &mut Vec<String>, record: &csv::StringRecord, column: usize) {
    match record.get(column) {
        Some(field) if !field.is_empty() => candidates.push(field.to_string()),
        _ => tracing::debug!("Skipping empty row {:?}", record.position()),
    }
}

fn write_report(rows: &[BatchRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| CpfError::IoError(e.into_error()))
}
