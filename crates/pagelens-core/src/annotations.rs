//! Scroll and form-state annotations.
//!
//! Collected from the live tree and written onto the clone only, so the live
//! document never gains anything but identifiers.

use std::collections::HashMap;

use tracing::debug;

use pagelens_dom::{Attribute, Document, NodeId, RenderQuery};
use pagelens_protocols::{
    Axis, ScrollState, SimplifyError, SCROLLABLE_ATTRIBUTE, SCROLLED_FROM_LEFT_ATTRIBUTE,
    SCROLLED_FROM_TOP_ATTRIBUTE,
};

use crate::geometry::{is_scrollable, scroll_percentage};

/// Extra attributes per live element, applied in order when cloning.
pub type Annotations = HashMap<NodeId, Vec<Attribute>>;

fn format_percentage(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

fn scroll_attributes(state: ScrollState) -> Vec<Attribute> {
    let mut attributes = vec![Attribute::new(SCROLLABLE_ATTRIBUTE, "true")];
    if let Some(top) = state.top.filter(|top| *top >= 0.0) {
        attributes.push(Attribute::new(SCROLLED_FROM_TOP_ATTRIBUTE, format_percentage(top)));
    }
    if let Some(left) = state.left.filter(|left| *left >= 0.0) {
        attributes.push(Attribute::new(SCROLLED_FROM_LEFT_ATTRIBUTE, format_percentage(left)));
    }
    attributes
}

/// Collect annotations for every element under `root`.
///
/// - `body` is always scrollable and reports the document root's position.
/// - Other scroll containers report their own position.
/// - An `input` whose live value is not reflected by a `value` attribute
///   gets one.
pub fn collect_annotations<R>(
    document: &Document,
    render: &R,
    root: NodeId,
) -> Result<Annotations, SimplifyError>
where
    R: RenderQuery + ?Sized,
{
    let mut annotations = Annotations::new();

    for node in document.descendant_elements(root) {
        let Some(element) = document.element(node) else {
            continue;
        };
        let mut attributes = Vec::new();

        if element.name == "body" {
            let metrics = render.document_scroll_metrics()?;
            attributes.extend(scroll_attributes(scroll_percentage(&metrics)));
        } else if is_scrollable(document, render, node, Axis::Vertical)?
            || is_scrollable(document, render, node, Axis::Horizontal)?
        {
            let metrics = render.scroll_metrics(node)?;
            attributes.extend(scroll_attributes(scroll_percentage(&metrics)));
        }

        if element.is_html() && element.name == "input" && element.attribute("value").is_none() {
            if let Some(value) = render.form_value(node).filter(|value| !value.is_empty()) {
                attributes.push(Attribute::new("value", value));
            }
        }

        if !attributes.is_empty() {
            annotations.insert(node, attributes);
        }
    }

    debug!(annotated = annotations.len(), "Collected clone annotations");
    Ok(annotations)
}
