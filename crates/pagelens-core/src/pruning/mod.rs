//! Structural reduction passes over the cloned document.
//!
//! Passes run in a fixed order; later passes rely on the shape earlier ones
//! leave behind (for example, wrapper removal expects attributes to be
//! stripped already). Every removal goes through [`PruneContext`], which keeps
//! the identifier table in step with the tree.

mod attributes;
mod collapse;
mod comments;
mod empty;
mod graphics;
mod invisible;
mod occlusion;
mod scripts;
mod spans;
mod wrappers;

use tracing::debug;

use pagelens_dom::{Document, NodeId, RenderQuery};
use pagelens_protocols::{
    BoundingBox, IdToBboxMap, InvisibleIdSet, SimplifyError, SimplifyOptions, ID_ATTRIBUTE,
};

use crate::cloner::ClonedPage;

/// Tags that passes never treat as removable wrappers.
const ALWAYS_KEPT_TAGS: &[&str] = &["img", "svg", "body"];

/// The cloned document plus the identifier table it must stay consistent with.
#[derive(Debug)]
pub struct PruneContext<'a> {
    document: Document,
    body: NodeId,
    bboxes: Option<&'a mut IdToBboxMap>,
}

impl<'a> PruneContext<'a> {
    pub fn new(page: ClonedPage, bboxes: Option<&'a mut IdToBboxMap>) -> Self {
        Self {
            document: page.document,
            body: page.body,
            bboxes,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Whether a geometry table was supplied.
    pub fn has_geometry(&self) -> bool {
        self.bboxes.is_some()
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub(crate) fn bbox_of(&self, node: NodeId) -> Option<BoundingBox> {
        let id = self.document.attribute(node, ID_ATTRIBUTE)?;
        self.bboxes.as_deref().and_then(|bboxes| bboxes.get(id)).copied()
    }

    /// Drop `id` from the identifier table.
    pub(crate) fn forget(&mut self, id: &str) {
        if let Some(bboxes) = self.bboxes.as_deref_mut() {
            bboxes.remove(id);
        }
    }

    /// Drop the identifier carried by `node`, if any, from the table.
    pub(crate) fn forget_element(&mut self, node: NodeId) {
        if let Some(id) = self.document.attribute(node, ID_ATTRIBUTE) {
            if let Some(bboxes) = self.bboxes.as_deref_mut() {
                bboxes.remove(id);
            }
        }
    }

    /// Remove the identifier attribute of `node` and forget it.
    pub(crate) fn strip_identifier(&mut self, node: NodeId) -> Result<(), SimplifyError> {
        if let Some(id) = self.document.remove_attribute(node, ID_ATTRIBUTE)? {
            self.forget(&id);
        }
        Ok(())
    }

    /// Detach `node` and forget every identifier in its subtree.
    ///
    /// The body is never removed. Returns whether anything was detached.
    pub(crate) fn remove_node(&mut self, node: NodeId) -> Result<bool, SimplifyError> {
        if node == self.body {
            return Ok(false);
        }
        for element in self.document.descendant_elements(node) {
            self.forget_element(element);
        }
        self.document.detach(node)?;
        Ok(true)
    }

    /// Element removable by the "empty element" style checks: an HTML element
    /// that is not the body, has no element children and no visible text.
    pub(crate) fn is_bare_leaf(&self, node: NodeId) -> bool {
        let Some(element) = self.document.element(node) else {
            return false;
        };
        node != self.body
            && element.is_html()
            && self.document.child_element_count(node) == 0
            && !self.document.has_text(node)
    }
}

/// Run every pass in order over `context`.
///
/// `live` and `render` describe the page the clone was taken from; they are
/// only used for hit testing during occlusion tagging.
pub fn run_pipeline<R>(
    context: &mut PruneContext<'_>,
    live: &Document,
    render: &R,
    invisible_ids: &InvisibleIdSet,
    options: &SimplifyOptions,
    viewport_only: bool,
) -> Result<(), SimplifyError>
where
    R: RenderQuery + ?Sized,
{
    let removed = scripts::strip_scripts_and_styles(context, options.include_scripts)?;
    debug!(pass = "scripts", removed, "Pruning pass complete");

    if context.has_geometry() {
        if !options.include_invisible {
            let removed = invisible::remove_invisible_leaves(
                context,
                invisible_ids,
                &render.viewport(),
                viewport_only,
            )?;
            debug!(pass = "invisible", removed, "Pruning pass complete");
        }
        let tagged = occlusion::tag_occluded(context, live, render)?;
        debug!(pass = "occlusion", tagged, "Pruning pass complete");
    }

    let removed = attributes::strip_attributes(context, options)?;
    debug!(pass = "attributes", removed, "Pruning pass complete");

    let removed = wrappers::remove_attributeless_wrappers(context)?;
    debug!(pass = "wrappers", removed, "Pruning pass complete");

    let unwrapped = spans::unwrap_text_spans(context)?;
    debug!(pass = "spans", unwrapped, "Pruning pass complete");

    let collapsed = collapse::collapse_single_child_parents(context)?;
    debug!(pass = "collapse", collapsed, "Pruning pass complete");

    let stripped = graphics::strip_graphics(context)?;
    debug!(pass = "graphics", stripped, "Pruning pass complete");

    let removed = comments::remove_comments(context)?;
    debug!(pass = "comments", removed, "Pruning pass complete");

    let removed = empty::remove_empty_elements(context)?;
    debug!(pass = "empty", removed, "Pruning pass complete");

    Ok(())
}

#[cfg(test)]
#[path = "pruning_tests.rs"]
mod tests;
