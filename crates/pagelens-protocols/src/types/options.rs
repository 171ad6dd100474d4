//! Caller options for one simplification.

use serde::{Deserialize, Serialize};

/// Options bag recognized by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimplifyOptions {
    /// Attribute names added to the allow-list.
    pub additional_attributes_to_keep: Vec<String>,
    /// Attribute names always removed, even when allow-listed.
    pub attributes_to_remove: Vec<String>,
    /// Skip invisible and off-screen pruning.
    pub include_invisible: bool,
    /// Keep `script` and `noscript` elements.
    pub include_scripts: bool,
}
