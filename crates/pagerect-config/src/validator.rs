//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::{Config, WindowChrome};

/// Largest chrome offset that still looks like a window border rather than a typo.
const MAX_PLAUSIBLE_CHROME: f64 = 100.0;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Convert the first error, if any, into a [`ConfigError`].
    pub fn into_result(mut self) -> Result<Vec<ValidationWarning>, ConfigError> {
        if self.errors.is_empty() {
            return Ok(self.warnings);
        }
        let first = self.errors.remove(0);
        Err(ConfigError::InvalidValue {
            field: first.path,
            message: first.message,
        })
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_browser(config, &mut result);
        Self::validate_chrome(&config.chrome, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_browser(config: &Config, result: &mut ValidationResult) {
        let endpoint = &config.browser.endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            result.add_error(ValidationError::new(
                "browser.endpoint",
                "endpoint must start with http:// or https://",
            ));
        }

        if config.browser.request_timeout_secs == 0 {
            result.add_error(ValidationError::new(
                "browser.request_timeout_secs",
                "request_timeout_secs must be greater than 0",
            ));
        }

        if config.browser.load_timeout_secs == 0 {
            result.add_error(ValidationError::new(
                "browser.load_timeout_secs",
                "load_timeout_secs must be greater than 0",
            ));
        }
    }

    fn validate_chrome(chrome: &WindowChrome, result: &mut ValidationResult) {
        let fields = [
            ("chrome.left_offset", chrome.left_offset),
            ("chrome.side_borders", chrome.side_borders),
            ("chrome.title_bar", chrome.title_bar),
            ("chrome.click_y_bias", chrome.click_y_bias),
        ];

        for (path, value) in fields {
            if !value.is_finite() || value < 0.0 {
                result.add_error(ValidationError::new(
                    path,
                    format!("must be a finite, non-negative pixel count, got {}", value),
                ));
            } else if value > MAX_PLAUSIBLE_CHROME {
                result.add_warning(ValidationWarning::new(
                    path,
                    format!(
                        "{} px is larger than any known window decoration",
                        value
                    ),
                ));
            }
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        if config.logging.level.trim().is_empty() {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                "empty log level, falling back to info",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
