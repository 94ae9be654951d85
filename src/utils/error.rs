use serde::Serialize;
use thiserror::Error;

/// 驗證失敗：屬於正常結果，會放在 verdict 內回傳給呼叫端
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationFailure {
    #[error("CPF must contain exactly 11 decimal digits")]
    InvalidFormat,

    #[error("CPF check digits do not match")]
    InvalidChecksum,
}

impl ValidationFailure {
    /// 對外使用的 reason 代碼 (例如 JSON 回應)
    pub fn code(&self) -> &'static str {
        match self {
            ValidationFailure::InvalidFormat => "invalid-format",
            ValidationFailure::InvalidChecksum => "invalid-checksum",
        }
    }
}

#[derive(Error, Debug)]
pub enum CpfError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CpfError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CpfError::ConfigError { .. }
            | CpfError::MissingConfigError { .. }
            | CpfError::InvalidConfigValueError { .. }
            | CpfError::TomlError(_) => ErrorCategory::Configuration,
            CpfError::CsvError(_) | CpfError::ProcessingError { .. } => ErrorCategory::Input,
            CpfError::IoError(_) | CpfError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CpfError::IoError(e) => format!("無法讀寫檔案: {}", e),
            CpfError::CsvError(e) => format!("輸入檔案格式錯誤: {}", e),
            CpfError::SerializationError(e) => format!("JSON 處理失敗: {}", e),
            CpfError::TomlError(e) => format!("設定檔格式錯誤: {}", e),
            CpfError::ConfigError { message } => format!("設定錯誤: {}", message),
            CpfError::MissingConfigError { field } => format!("缺少必要設定: {}", field),
            CpfError::InvalidConfigValueError { field, reason, .. } => {
                format!("設定值無效 ({}): {}", field, reason)
            }
            CpfError::ProcessingError { message } => format!("處理失敗: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CpfError::IoError(_) => "Check that the input file exists and the output directory is writable",
            CpfError::CsvError(_) => "Provide a CSV with a 'cpf' header column or one CPF per line",
            CpfError::SerializationError(_) => "Send a JSON body such as {\"cpf\": \"111.444.777-35\"}",
            CpfError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            CpfError::ConfigError { .. } | CpfError::MissingConfigError { .. } => {
                "Review the configuration file and environment variables"
            }
            CpfError::InvalidConfigValueError { .. } => {
                "Correct the highlighted configuration value and retry"
            }
            CpfError::ProcessingError { .. } => "Inspect the input data and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, CpfError>;
