use crate::domain::model::{Cpf, ValidatorSettings, Verdict, CPF_LENGTH};
use crate::domain::ports::SettingsProvider;
use crate::utils::error::ValidationFailure;

#[derive(Debug, Clone, Default)]
pub struct Validator {
    settings: ValidatorSettings,
}

impl Validator {
    pub fn new(settings: ValidatorSettings) -> Self {
        Self { settings }
    }

    pub fn from_provider<P: SettingsProvider + ?Sized>(provider: &P) -> Self {
        Self::new(provider.validator_settings())
    }

    pub fn settings(&self) -> &ValidatorSettings {
        &self.settings
    }

    pub fn normalize(&self, raw: &str) -> String {
        normalize(raw, &self.settings.separators)
    }

    pub fn validate(&self, raw: &str) -> Result<Cpf, ValidationFailure> {
        let normalized = self.normalize(raw);
        let digits = parse_digits(&normalized).ok_or(ValidationFailure::InvalidFormat)?;

        if self.settings.reject_repeated_digits && digits.iter().all(|&d| d == digits[0]) {
            tracing::debug!("Rejecting repeated-digit CPF {}", normalized);
            return Err(ValidationFailure::InvalidChecksum);
        }

        let first = check_digit(&digits[..9]);
        let second = check_digit(&digits[..10]);

        if first != digits[9] || second != digits[10] {
            tracing::debug!(
                "Check digit mismatch for {}: expected {}{}",
                normalized,
                first,
                second
            );
            return Err(ValidationFailure::InvalidChecksum);
        }

        Ok(Cpf::from_digits(digits))
    }

    pub fn verdict(&self, raw: &str) -> Verdict {
        Verdict::from(self.validate(raw))
    }
}

/// 使用預設設定驗證
pub fn validate(raw: &str) -> Result<Cpf, ValidationFailure> {
    Validator::default().validate(raw)
}

/// 去除前後空白與分隔符號，其他字元原樣保留
pub fn normalize(raw: &str, separators: &[char]) -> String {
    raw.trim()
        .chars()
        .filter(|c| !separators.contains(c))
        .collect()
}

/// Computes both check digits for the nine-digit base of a CPF.
pub fn check_digits(base: &[u8; 9]) -> (u8, u8) {
    let first = check_digit(base);

    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;

    (first, check_digit(&extended))
}

// 權重從 len + 1 遞減到 2
fn check_digit(digits: &[u8]) -> u8 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top_weight).rev())
        .map(|(&digit, weight)| u32::from(digit) * weight)
        .sum();

    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => (11 - remainder) as u8,
    }
}

fn parse_digits(normalized: &str) -> Option<[u8; CPF_LENGTH]> {
    let bytes = normalized.as_bytes();
    if bytes.len() != CPF_LENGTH {
        return None;
    }

    let mut digits = [0u8; CPF_LENGTH];
    for (slot, &byte) in digits.iter_mut().zip(bytes) {
        if !byte.is_ascii_digit() {
            return None;
        }
        *slot = byte - b'0';
    }
    Some(digits)
}
