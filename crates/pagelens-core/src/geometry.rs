//! Element geometry: global bounding boxes and scroll state.

use pagelens_dom::{Document, NodeId, RenderQuery};
use pagelens_protocols::{Axis, BoundingBox, RenderError, ScrollMetrics, ScrollState};

/// Bounding box in top-level viewport coordinates.
///
/// Rectangles of elements inside a frame are relative to that frame, so the
/// frame element's own origin is added (one level).
pub fn bounding_box<R>(render: &R, node: NodeId) -> Result<BoundingBox, RenderError>
where
    R: RenderQuery + ?Sized,
{
    let rect = render.client_rect(node)?;
    match render.frame_element(node) {
        Some(frame) => {
            let frame_rect = render.client_rect(frame)?;
            Ok(rect.translated(frame_rect.x, frame_rect.y))
        }
        None => Ok(rect),
    }
}

fn axis_percentage(metrics: &ScrollMetrics, axis: Axis) -> Option<f64> {
    let scrollable = metrics.overflow(axis);
    if scrollable == 0.0 {
        None
    } else {
        Some(metrics.offset(axis) * 100.0 / scrollable)
    }
}

/// Scroll position per axis as a percentage of the scrollable distance.
pub fn scroll_percentage(metrics: &ScrollMetrics) -> ScrollState {
    ScrollState {
        top: axis_percentage(metrics, Axis::Vertical),
        left: axis_percentage(metrics, Axis::Horizontal),
    }
}

/// Whether `node` is a scroll container with overflow along `axis`.
///
/// The body scrolls through the document root and is never reported here.
pub fn is_scrollable<R>(
    document: &Document,
    render: &R,
    node: NodeId,
    axis: Axis,
) -> Result<bool, RenderError>
where
    R: RenderQuery + ?Sized,
{
    if document.tag_name(node) == Some("body") {
        return Ok(false);
    }
    let metrics = render.scroll_metrics(node)?;
    if metrics.overflow(axis) <= 0.0 {
        return Ok(false);
    }
    let classes = render.computed_style(node)?.overflow_classes(axis);
    Ok(classes.contains("auto") || classes.contains("scroll"))
}
