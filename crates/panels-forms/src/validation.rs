//! Field validators.

use regex::Regex;

use crate::widgets::DateRange;

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "This field is required.".to_string(),
        }
    }

    /// Creates a new RequiredValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new RegexValidator.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for the `MM/DD/YYYY - MM/DD/YYYY` date range form.
#[derive(Debug, Clone)]
pub struct DateRangeValidator {
    message: String,
}

impl DateRangeValidator {
    /// Creates a new DateRangeValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a date range as MM/DD/YYYY - MM/DD/YYYY.".to_string(),
        }
    }

    /// Creates a new DateRangeValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for DateRangeValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for DateRangeValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if DateRange::parse(value).is_ok() {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validator() {
        let v = RequiredValidator::new();
        assert!(v.validate("hello").is_ok());
        assert!(v.validate("").is_err());
        assert!(v.validate("   ").is_err());
    }

    #[test]
    fn test_regex_validator() {
        let v = RegexValidator::new(r"^NCT\d{8}$", "Enter a valid NCT id.").unwrap();
        assert!(v.validate("NCT01234567").is_ok());
        assert!(v.validate("01234567").is_err());
    }

    #[test]
    fn test_date_range_validator() {
        let v = DateRangeValidator::new();
        assert!(v.validate("01/05/2023 - 03/17/2023").is_ok());
        assert!(v.validate("01/05/2023").is_err());
        assert!(v.validate("yesterday - today").is_err());
    }
}
