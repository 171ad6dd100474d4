//! Final empty-element sweep.

use pagelens_dom::NodeId;
use pagelens_protocols::SimplifyError;

use super::PruneContext;

fn visit(
    context: &mut PruneContext<'_>,
    node: NodeId,
    removed: &mut usize,
) -> Result<(), SimplifyError> {
    for child in context.document.element_children(node) {
        visit(context, child, removed)?;
    }

    // At most one attribute: normally the identifier.
    if context.document.attributes(node).len() <= 1
        && context.document.tag_name(node) != Some("input")
        && context.is_bare_leaf(node)
        && context.remove_node(node)?
    {
        *removed += 1;
    }
    Ok(())
}

pub(super) fn remove_empty_elements(context: &mut PruneContext<'_>) -> Result<usize, SimplifyError> {
    let mut removed = 0;
    let body = context.body;
    visit(context, body, &mut removed)?;
    Ok(removed)
}
