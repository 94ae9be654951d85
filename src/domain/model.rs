use crate::utils::error::ValidationFailure;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CPF_LENGTH: usize = 11;

pub const DEFAULT_SEPARATORS: [char; 2] = ['.', '-'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorSettings {
    /// 正規化時移除的字元
    pub separators: Vec<char>,
    /// 拒絕 "111.111.111-11" 這類全部相同的號碼 (算術上會通過檢查碼)
    pub reject_repeated_digits: bool,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_vec(),
            reject_repeated_digits: true,
        }
    }
}

/// A CPF whose format and check digits have been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cpf {
    digits: [u8; CPF_LENGTH],
}

impl Cpf {
    pub(crate) fn from_digits(digits: [u8; CPF_LENGTH]) -> Self {
        Self { digits }
    }

    /// Eleven digits without punctuation, e.g. `11144477735`.
    pub fn digits(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// Masked form `XXX.XXX.XXX-XX`.
    pub fn formatted(&self) -> String {
        let digits = self.digits();
        format!(
            "{}.{}.{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..11]
        )
    }

    /// 第 9 位數字代表發證的稅務區
    pub fn fiscal_region(&self) -> FiscalRegion {
        FiscalRegion(self.digits[8])
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FiscalRegion(u8);

impl FiscalRegion {
    pub fn code(&self) -> u8 {
        self.0
    }

    pub fn states(&self) -> &'static [&'static str] {
        match self.0 {
            0 => &["RS"],
            1 => &["DF", "GO", "MS", "MT", "TO"],
            2 => &["AC", "AM", "AP", "PA", "RO", "RR"],
            3 => &["CE", "MA", "PI"],
            4 => &["AL", "PB", "PE", "RN"],
            5 => &["BA", "SE"],
            6 => &["MG"],
            7 => &["ES", "RJ"],
            8 => &["SP"],
            _ => &["PR", "SC"],
        }
    }
}

/// Wire form of a validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ValidationFailure>,
}

impl From<Result<Cpf, ValidationFailure>> for Verdict {
    fn from(outcome: Result<Cpf, ValidationFailure>) -> Self {
        match outcome {
            Ok(cpf) => Self {
                valid: true,
                cpf: Some(cpf.digits()),
                formatted: Some(cpf.formatted()),
                region: Some(cpf.fiscal_region().states()),
                reason: None,
            },
            Err(failure) => Self {
                valid: false,
                cpf: None,
                formatted: None,
                region: None,
                reason: Some(failure),
            },
        }
    }
}
