//! Render queries answered from recorded layout.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use pagelens_protocols::{BoundingBox, ComputedStyle, RenderError, ScrollMetrics, ViewportInfo};

use crate::document::Document;
use crate::node::NodeId;
use crate::render::RenderQuery;

/// Recorded layout of one element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementLayout {
    /// Rectangle relative to the element's own document.
    pub rect: BoundingBox,
    pub style: ComputedStyle,
    pub scroll: ScrollMetrics,
    /// Live value of a form control.
    pub value: Option<String>,
}

impl ElementLayout {
    pub fn at(rect: BoundingBox) -> Self {
        Self {
            rect,
            ..Default::default()
        }
    }
}

/// [`RenderQuery`] over a fixed layout capture.
///
/// Elements without a recorded layout behave like unrendered elements: a
/// zero rectangle, default style and no scroll overflow. Hit testing returns
/// every hit-testable element whose rectangle contains the point, ordered by
/// `z_index` and then by reverse document order, and nothing for points
/// outside the viewport. Framed elements are tested at their position in
/// the top-level viewport.
#[derive(Debug, Clone)]
pub struct StaticRenderer {
    viewport: ViewportInfo,
    document_scroll: ScrollMetrics,
    layouts: HashMap<NodeId, ElementLayout>,
    frames: HashMap<NodeId, NodeId>,
    paint_order: HashMap<NodeId, usize>,
}

impl StaticRenderer {
    /// Create a renderer for `document`, recording its current document order.
    pub fn new(document: &Document, viewport: ViewportInfo) -> Self {
        let paint_order = document
            .descendant_elements(document.root())
            .into_iter()
            .enumerate()
            .map(|(position, node)| (node, position))
            .collect();
        Self {
            viewport,
            document_scroll: ScrollMetrics::default(),
            layouts: HashMap::new(),
            frames: HashMap::new(),
            paint_order,
        }
    }

    pub fn with_document_scroll(mut self, metrics: ScrollMetrics) -> Self {
        self.document_scroll = metrics;
        self
    }

    pub fn set_layout(&mut self, node: NodeId, layout: ElementLayout) {
        self.layouts.insert(node, layout);
    }

    /// Layout for `node`, created with defaults on first access.
    pub fn layout_mut(&mut self, node: NodeId) -> &mut ElementLayout {
        self.layouts.entry(node).or_default()
    }

    pub fn set_rect(&mut self, node: NodeId, rect: BoundingBox) {
        self.layout_mut(node).rect = rect;
    }

    pub fn set_style(&mut self, node: NodeId, style: ComputedStyle) {
        self.layout_mut(node).style = style;
    }

    /// Mark `node` as living in the document rendered by `frame`.
    pub fn set_frame(&mut self, node: NodeId, frame: NodeId) {
        self.frames.insert(node, frame);
    }

    pub fn layout(&self, node: NodeId) -> Option<&ElementLayout> {
        self.layouts.get(&node)
    }

    fn top_level_rect(&self, node: NodeId, layout: &ElementLayout) -> BoundingBox {
        match self.frames.get(&node).and_then(|frame| self.layouts.get(frame)) {
            Some(frame) => layout.rect.translated(frame.rect.x, frame.rect.y),
            None => layout.rect,
        }
    }

    fn order_of(&self, node: NodeId) -> usize {
        self.paint_order.get(&node).copied().unwrap_or(node.index())
    }
}

impl RenderQuery for StaticRenderer {
    fn viewport(&self) -> ViewportInfo {
        self.viewport
    }

    fn client_rect(&self, node: NodeId) -> Result<BoundingBox, RenderError> {
        Ok(self.layouts.get(&node).map(|layout| layout.rect).unwrap_or_default())
    }

    fn frame_element(&self, node: NodeId) -> Option<NodeId> {
        self.frames.get(&node).copied()
    }

    fn computed_style(&self, node: NodeId) -> Result<ComputedStyle, RenderError> {
        Ok(self
            .layouts
            .get(&node)
            .map(|layout| layout.style.clone())
            .unwrap_or_default())
    }

    fn scroll_metrics(&self, node: NodeId) -> Result<ScrollMetrics, RenderError> {
        Ok(self.layouts.get(&node).map(|layout| layout.scroll).unwrap_or_default())
    }

    fn document_scroll_metrics(&self) -> Result<ScrollMetrics, RenderError> {
        Ok(self.document_scroll)
    }

    fn elements_at_point(&self, x: f64, y: f64) -> Result<Vec<NodeId>, RenderError> {
        if x < 0.0
            || y < 0.0
            || x >= f64::from(self.viewport.width)
            || y >= f64::from(self.viewport.height)
        {
            return Ok(Vec::new());
        }

        let mut hits: Vec<(NodeId, i32)> = self
            .layouts
            .iter()
            .filter(|(node, layout)| {
                layout.style.is_hit_testable()
                    && !layout.rect.is_zero_area()
                    && self.top_level_rect(**node, layout).contains(x, y)
            })
            .map(|(node, layout)| (*node, layout.style.z_index))
            .collect();

        hits.sort_by_key(|(node, z_index)| (Reverse(*z_index), Reverse(self.order_of(*node))));
        Ok(hits.into_iter().map(|(node, _)| node).collect())
    }

    fn form_value(&self, node: NodeId) -> Option<String> {
        self.layouts.get(&node).and_then(|layout| layout.value.clone())
    }
}

#[cfg(test)]
#[path = "static_render_tests.rs"]
mod tests;
