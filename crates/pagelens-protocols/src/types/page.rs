//! Identifier tables and the invocation result.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::BoundingBox;

/// Identifier to bounding box table.
///
/// Filled from the live tree before cloning; entries are deleted as their
/// elements are pruned so the final table only covers surviving elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdToBboxMap(BTreeMap<String, BoundingBox>);

impl IdToBboxMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, bbox: BoundingBox) {
        self.0.insert(id.into(), bbox);
    }

    pub fn get(&self, id: &str) -> Option<&BoundingBox> {
        self.0.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<BoundingBox> {
        self.0.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoundingBox)> {
        self.0.iter().map(|(id, bbox)| (id.as_str(), bbox))
    }
}

/// Identifiers whose live element is hidden by CSS.
pub type InvisibleIdSet = HashSet<String>;

/// Output of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedPage {
    /// Geometry for identifiers that survived pruning.
    pub bboxes: IdToBboxMap,
    /// Indented pseudo-HTML tree.
    pub modified_html: String,
}

impl SimplifiedPage {
    pub fn is_empty(&self) -> bool {
        self.modified_html.is_empty() && self.bboxes.is_empty()
    }
}
