//! Render query interface.
//!
//! Layout, computed style and hit testing only exist in a live rendering
//! engine. The pipeline reaches them through [`RenderQuery`], which the host
//! implements for the document it hands in.

use pagelens_protocols::{BoundingBox, ComputedStyle, RenderError, ScrollMetrics, ViewportInfo};

use crate::node::NodeId;

/// Queries answered by the rendering engine for nodes of the live document.
pub trait RenderQuery {
    /// Current viewport size.
    fn viewport(&self) -> ViewportInfo;

    /// Border box relative to the element's own document viewport.
    ///
    /// Elements that are not rendered report an all-zero rectangle.
    fn client_rect(&self, node: NodeId) -> Result<BoundingBox, RenderError>;

    /// The frame element hosting the document that `node` belongs to, if
    /// that document is rendered inside a frame.
    fn frame_element(&self, node: NodeId) -> Option<NodeId>;

    fn computed_style(&self, node: NodeId) -> Result<ComputedStyle, RenderError>;

    fn scroll_metrics(&self, node: NodeId) -> Result<ScrollMetrics, RenderError>;

    /// Scroll metrics of the document root (`document.documentElement`).
    fn document_scroll_metrics(&self) -> Result<ScrollMetrics, RenderError>;

    /// All elements whose hit-test region contains the point, topmost first.
    fn elements_at_point(&self, x: f64, y: f64) -> Result<Vec<NodeId>, RenderError>;

    /// Current value of a form control, which may differ from its `value`
    /// attribute.
    fn form_value(&self, node: NodeId) -> Option<String>;
}
