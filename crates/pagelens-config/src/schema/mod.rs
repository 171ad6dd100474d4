//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use pagelens_protocols::SimplifyOptions;

mod schema_output;

pub use schema_output::*;

pub(crate) fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simplifier: SimplifierConfig,

    #[serde(default)]
    pub viewport: ViewportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Pipeline options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifierConfig {
    /// Drop content outside the viewport.
    #[serde(default = "default_true")]
    pub viewport_only: bool,

    #[serde(default)]
    pub include_invisible: bool,

    #[serde(default)]
    pub include_scripts: bool,

    /// Extra attribute names to keep on top of the built-in allow-list.
    #[serde(default)]
    pub additional_attributes_to_keep: Vec<String>,

    /// Attribute names always stripped.
    #[serde(default)]
    pub attributes_to_remove: Vec<String>,
}

impl Default for SimplifierConfig {
    fn default() -> Self {
        Self {
            viewport_only: default_true(),
            include_invisible: false,
            include_scripts: false,
            additional_attributes_to_keep: Vec::new(),
            attributes_to_remove: Vec::new(),
        }
    }
}

impl SimplifierConfig {
    pub fn options(&self) -> SimplifyOptions {
        SimplifyOptions {
            additional_attributes_to_keep: self.additional_attributes_to_keep.clone(),
            attributes_to_remove: self.attributes_to_remove.clone(),
            include_invisible: self.include_invisible,
            include_scripts: self.include_scripts,
        }
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
