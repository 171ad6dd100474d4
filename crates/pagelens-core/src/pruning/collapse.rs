//! Single-child parent collapsing.

use pagelens_dom::NodeId;
use pagelens_protocols::{SimplifyError, ID_ATTRIBUTE};

use super::PruneContext;

fn is_collapsible(context: &PruneContext<'_>, node: NodeId) -> bool {
    let Some(element) = context.document.element(node) else {
        return false;
    };
    node != context.body
        && element.name != "body"
        && element.has_only_attribute(ID_ATTRIBUTE)
        && context.document.child_element_count(node) == 1
        && !context.document.has_direct_text(node)
}

fn visit(
    context: &mut PruneContext<'_>,
    node: NodeId,
    collapsed: &mut usize,
) -> Result<(), SimplifyError> {
    if is_collapsible(context, node) {
        if let (Some(parent), Some(&child)) = (
            context.document.parent(node),
            context.document.element_children(node).first(),
        ) {
            context.forget_element(node);
            context.document.replace_child(parent, child, node)?;
            *collapsed += 1;
            return visit(context, child, collapsed);
        }
    }

    for child in context.document.element_children(node) {
        visit(context, child, collapsed)?;
    }
    Ok(())
}

/// Replace bare wrappers around a single element with that element.
pub(super) fn collapse_single_child_parents(
    context: &mut PruneContext<'_>,
) -> Result<usize, SimplifyError> {
    let mut collapsed = 0;
    let body = context.body;
    visit(context, body, &mut collapsed)?;
    Ok(collapsed)
}
