//! Configuration validation.

use crate::config::schema::{Config, StoreKind};
use crate::error::{Error, Result};

/// Longest variable name the Windows environment accepts.
const MAX_VARIABLE_LEN: usize = 255;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use slimpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { separator: Some(";;".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref variable) = config.variable {
            Self::validate_variable(variable)?;
        }

        if let Some(ref separator) = config.separator {
            Self::validate_separator(separator)?;
        }

        if config.store == Some(StoreKind::Registry) && !cfg!(windows) {
            return Err(Error::Validation {
                field: "store".into(),
                message: "the registry store is only available on Windows".into(),
            });
        }

        Ok(())
    }

    /// Variable names must be non-empty and free of `=` and NUL.
    fn validate_variable(value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: "variable".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if value.contains('=') {
            return Err(Error::Validation {
                field: "variable".into(),
                message: "Cannot contain '='".into(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: "variable".into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if value.len() > MAX_VARIABLE_LEN {
            return Err(Error::Validation {
                field: "variable".into(),
                message: format!("Cannot exceed {MAX_VARIABLE_LEN} characters"),
            });
        }

        Ok(())
    }

    /// Separators are a single non-whitespace character.
    fn validate_separator(value: &str) -> Result<()> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Ok(()),
            (Some(c), None) => Err(Error::Validation {
                field: "separator".into(),
                message: format!("Cannot be whitespace: {c:?}"),
            }),
            _ => Err(Error::Validation {
                field: "separator".into(),
                message: format!("Must be exactly one character, got {value:?}"),
            }),
        }
    }
}
