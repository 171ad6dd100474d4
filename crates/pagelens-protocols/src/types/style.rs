//! Subset of computed style consulted by the pipeline.

use serde::{Deserialize, Serialize};

/// Computed style values, as CSS keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComputedStyle {
    pub display: String,
    pub visibility: String,
    pub opacity: String,
    pub overflow: String,
    pub overflow_x: String,
    pub overflow_y: String,
    pub pointer_events: String,
    /// Stacking order used by hit testing; `0` for `auto`.
    pub z_index: i32,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: "block".to_string(),
            visibility: "visible".to_string(),
            opacity: "1".to_string(),
            overflow: "visible".to_string(),
            overflow_x: "visible".to_string(),
            overflow_y: "visible".to_string(),
            pointer_events: "auto".to_string(),
            z_index: 0,
        }
    }
}

impl ComputedStyle {
    /// CSS has marked the element as invisible.
    pub fn is_marked_invisible(&self) -> bool {
        self.display == "none" || self.visibility == "hidden" || self.opacity == "0"
    }

    /// Combined `overflow` and `overflow-{x,y}` keywords for one axis.
    pub fn overflow_classes(&self, axis: super::Axis) -> String {
        let specific = match axis {
            super::Axis::Vertical => &self.overflow_y,
            super::Axis::Horizontal => &self.overflow_x,
        };
        format!("{}{}", self.overflow, specific)
    }

    /// Whether hit testing can return this element.
    pub fn is_hit_testable(&self) -> bool {
        self.display != "none" && self.visibility != "hidden" && self.pointer_events != "none"
    }
}
