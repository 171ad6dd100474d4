//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

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
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_simplifier(config, &mut result);
        Self::validate_viewport(config, &mut result);
        Self::validate_logging(config, &mut result);

        Ok(result)
    }

    fn validate_simplifier(config: &Config, result: &mut ValidationResult) {
        let simplifier = &config.simplifier;

        let lists = [
            (
                "simplifier.additional_attributes_to_keep",
                &simplifier.additional_attributes_to_keep,
            ),
            (
                "simplifier.attributes_to_remove",
                &simplifier.attributes_to_remove,
            ),
        ];
        for (path, names) in lists {
            if names.iter().any(|name| name.trim().is_empty()) {
                result.add_error(ValidationError::new(path, "Attribute names cannot be empty"));
            }
        }

        for name in &simplifier.additional_attributes_to_keep {
            if simplifier.attributes_to_remove.contains(name) {
                result.add_warning(ValidationWarning::new(
                    "simplifier.attributes_to_remove",
                    format!("Attribute '{}' is both kept and removed; it will be removed", name),
                ));
            }
        }
    }

    fn validate_viewport(config: &Config, result: &mut ValidationResult) {
        if config.viewport.width == 0 {
            result.add_error(ValidationError::new(
                "viewport.width",
                "width must be greater than 0",
            ));
        }

        if config.viewport.height == 0 {
            result.add_error(ValidationError::new(
                "viewport.height",
                "height must be greater than 0",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        } else if !level.contains('=') && !LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!("Unknown log level '{}', valid values: {:?}", level, LEVELS),
            ));
        }

        if let Some(directory) = &config.logging.directory {
            if directory.exists() && !directory.is_dir() {
                result.add_error(ValidationError::new(
                    "logging.directory",
                    format!("Log directory is not a directory: {:?}", directory),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
