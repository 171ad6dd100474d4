//! Serialized page captures: tree plus recorded layout.
//!
//! ```json
//! {
//!   "viewport": { "width": 1280, "height": 720 },
//!   "documentScroll": { "scrollHeight": 2000, "clientHeight": 720 },
//!   "root": {
//!     "type": "element", "tag": "html",
//!     "children": [
//!       { "type": "element", "tag": "body",
//!         "layout": { "rect": { "x": 0, "y": 0, "width": 1280, "height": 720 } },
//!         "children": [ { "type": "text", "text": "hello" } ] }
//!     ]
//!   }
//! }
//! ```
//!
//! Children of an `iframe`/`frame` element are the content of the framed
//! document; their rectangles are relative to that frame.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use pagelens_protocols::{DomError, ScrollMetrics, ViewportInfo};

use crate::document::Document;
use crate::node::{Attribute, Namespace, NodeId};
use crate::static_render::{ElementLayout, StaticRenderer};

/// Snapshot loading errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid snapshot: {0}")]
    Invalid(String),

    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
}

/// A captured page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    #[serde(default)]
    pub viewport: ViewportInfo,
    #[serde(default)]
    pub document_scroll: ScrollMetrics,
    pub root: SnapshotNode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SnapshotNode {
    Element(SnapshotElement),
    Text { text: String },
    Comment { text: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotElement {
    pub tag: String,
    #[serde(default)]
    pub namespace: Namespace,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub layout: Option<ElementLayout>,
    #[serde(default)]
    pub children: Vec<SnapshotNode>,
}

fn is_frame_tag(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("iframe") || tag.eq_ignore_ascii_case("frame")
}

impl PageSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the live document and a renderer answering from the capture.
    pub fn into_page(self) -> Result<(Document, StaticRenderer), SnapshotError> {
        if !matches!(self.root, SnapshotNode::Element(_)) {
            return Err(SnapshotError::Invalid(
                "root node must be an element".to_string(),
            ));
        }

        let mut document = Document::new();
        let mut layouts: Vec<(NodeId, ElementLayout)> = Vec::new();
        let mut frames: Vec<(NodeId, NodeId)> = Vec::new();

        let mut stack: Vec<(SnapshotNode, NodeId, Option<NodeId>)> =
            vec![(self.root, document.root(), None)];

        while let Some((node, parent, frame)) = stack.pop() {
            match node {
                SnapshotNode::Element(element) => {
                    let id = document.create_element(&element.tag, element.namespace);
                    if let Some(data) = document.element_mut(id) {
                        for attribute in element.attributes {
                            data.set_attribute(&attribute.name, attribute.value);
                        }
                    }
                    document.append_child(parent, id)?;

                    if let Some(layout) = element.layout {
                        layouts.push((id, layout));
                    }
                    if let Some(frame) = frame {
                        frames.push((id, frame));
                    }

                    let child_frame = if is_frame_tag(&element.tag) {
                        Some(id)
                    } else {
                        frame
                    };
                    for child in element.children.into_iter().rev() {
                        stack.push((child, id, child_frame));
                    }
                }
                SnapshotNode::Text { text } => {
                    let id = document.create_text(text);
                    document.append_child(parent, id)?;
                }
                SnapshotNode::Comment { text } => {
                    let id = document.create_comment(text);
                    document.append_child(parent, id)?;
                }
            }
        }

        let mut renderer =
            StaticRenderer::new(&document, self.viewport).with_document_scroll(self.document_scroll);
        for (node, layout) in layouts {
            renderer.set_layout(node, layout);
        }
        for (node, frame) in frames {
            renderer.set_frame(node, frame);
        }

        debug!(nodes = document.arena_len(), "Loaded page snapshot");
        Ok((document, renderer))
    }
}
