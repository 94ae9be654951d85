pub mod batch;
pub mod cpf;

pub use crate::domain::model::{Cpf, FiscalRegion, ValidatorSettings, Verdict};
pub use crate::domain::ports::{SettingsProvider, Storage};
pub use crate::utils::error::{Result, ValidationFailure};
