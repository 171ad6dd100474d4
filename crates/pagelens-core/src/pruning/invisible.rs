//! Invisible-leaf removal.
//!
//! Bottom-up: children are settled before their parent is judged, so an
//! off-screen container only goes once nothing visible is left inside it.

use pagelens_dom::NodeId;
use pagelens_protocols::{IdToBboxMap, InvisibleIdSet, SimplifyError, ViewportInfo};

use super::PruneContext;
use crate::visibility::{
    is_explicitly_invisible, is_intrinsically_invisible, is_offscreen, is_onscreen_zero_area,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Keep,
    Remove,
    Squash,
}

struct Classifier<'a> {
    invisible_ids: &'a InvisibleIdSet,
    viewport: &'a ViewportInfo,
    viewport_only: bool,
}

impl Classifier<'_> {
    fn bboxes<'c>(context: &'c PruneContext<'_>) -> Option<&'c IdToBboxMap> {
        context.bboxes.as_deref()
    }

    fn is_intrinsically_invisible(&self, context: &PruneContext<'_>, node: NodeId) -> bool {
        match (context.document.element(node), Self::bboxes(context)) {
            (Some(element), Some(bboxes)) => is_intrinsically_invisible(element, bboxes),
            _ => false,
        }
    }

    fn verdict(&self, context: &PruneContext<'_>, node: NodeId, is_root: bool) -> Verdict {
        let (Some(element), Some(bboxes)) = (context.document.element(node), Self::bboxes(context))
        else {
            return Verdict::Keep;
        };

        let restrict = self.viewport_only.then_some(self.viewport);
        if is_offscreen(element, bboxes, restrict) && context.document.child_element_count(node) == 0
        {
            return Verdict::Remove;
        }
        if is_explicitly_invisible(element, self.invisible_ids) {
            return Verdict::Remove;
        }
        if !is_root && is_onscreen_zero_area(element, bboxes, self.viewport) {
            return Verdict::Squash;
        }
        Verdict::Keep
    }

    fn visit(
        &self,
        context: &mut PruneContext<'_>,
        node: NodeId,
        is_root: bool,
        removed: &mut usize,
    ) -> Result<(), SimplifyError> {
        for child in context.document.element_children(node) {
            if self.is_intrinsically_invisible(context, child) {
                if context.remove_node(child)? {
                    *removed += 1;
                }
                continue;
            }
            self.visit(context, child, false, removed)?;
        }

        match self.verdict(context, node, is_root) {
            Verdict::Keep => {}
            Verdict::Remove => {
                if context.remove_node(node)? {
                    *removed += 1;
                }
            }
            Verdict::Squash => {
                if squash(context, node)? {
                    *removed += 1;
                }
            }
        }
        Ok(())
    }
}

/// Splice the children of `node` into its parent at its position, then drop it.
fn squash(context: &mut PruneContext<'_>, node: NodeId) -> Result<bool, SimplifyError> {
    let Some(parent) = context.document.parent(node) else {
        return Ok(false);
    };
    for child in context.document.children(node).to_vec() {
        context.document.insert_before(parent, child, node)?;
    }
    context.remove_node(node)
}

/// Remove what cannot be seen, starting from the body.
///
/// Requires a geometry table; without one nothing is removed.
pub(super) fn remove_invisible_leaves(
    context: &mut PruneContext<'_>,
    invisible_ids: &InvisibleIdSet,
    viewport: &ViewportInfo,
    viewport_only: bool,
) -> Result<usize, SimplifyError> {
    if !context.has_geometry() {
        return Ok(0);
    }
    let classifier = Classifier {
        invisible_ids,
        viewport,
        viewport_only,
    };
    let mut removed = 0;
    let body = context.body;
    classifier.visit(context, body, true, &mut removed)?;
    Ok(removed)
}
