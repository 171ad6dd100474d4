//! Validate subcommand handler.

use tracing::{error, warn};

use pagelens_config::{Config, ConfigValidator};

/// Handle `pagelens validate`.
pub(crate) fn handle_validate(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config)?;

    for warning in &result.warnings {
        warn!(path = %warning.path, "{}", warning.message);
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for problem in &result.errors {
        error!(path = %problem.path, "{}", problem.message);
        println!("error: {}: {}", problem.path, problem.message);
    }

    if !result.is_valid() {
        return Err(format!("{} configuration error(s)", result.errors.len()).into());
    }
    println!("Configuration OK");
    Ok(())
}
