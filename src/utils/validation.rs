use crate::utils::error::{CpfError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CpfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CpfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CpfError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CpfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 分隔符號不能是數字或空白，也不能重複
pub fn validate_separators(field_name: &str, separators: &[char]) -> Result<()> {
    let mut seen = HashSet::new();

    for &separator in separators {
        if separator.is_ascii_digit() || separator.is_whitespace() {
            return Err(CpfError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: separator.to_string(),
                reason: "Separators cannot be digits or whitespace".to_string(),
            });
        }

        if !seen.insert(separator) {
            return Err(CpfError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: separator.to_string(),
                reason: "Separator is listed more than once".to_string(),
            });
        }
    }

    Ok(())
}

/// 參數名稱用於 path / query / body 查找，只允許 ASCII 英數與底線
pub fn validate_parameter_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(CpfError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Parameter name can only contain ASCII letters, digits, and underscores"
                .to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", "./report.csv").is_ok());
        assert!(validate_path("output", "").is_err());
        assert!(validate_path("output", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_separators() {
        assert!(validate_separators("separators", &['.', '-']).is_ok());
        assert!(validate_separators("separators", &[]).is_ok());
        assert!(validate_separators("separators", &['.', '.']).is_err());
        assert!(validate_separators("separators", &['1']).is_err());
        assert!(validate_separators("separators", &[' ']).is_err());
    }

    #[test]
    fn test_validate_parameter_name() {
        assert!(validate_parameter_name("parameter", "cpf").is_ok());
        assert!(validate_parameter_name("parameter", "tax_id2").is_ok());
        assert!(validate_parameter_name("parameter", "").is_err());
        assert!(validate_parameter_name("parameter", "cpf-number").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("cpf".to_string());
        assert_eq!(validate_required_field("parameter", &present).unwrap(), "cpf");

        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("parameter", &missing),
            Err(CpfError::MissingConfigError { .. })
        ));
    }
}
