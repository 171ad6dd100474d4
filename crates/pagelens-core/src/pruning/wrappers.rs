//! Attributeless wrapper removal.

use pagelens_dom::NodeId;
use pagelens_protocols::{SimplifyError, ID_ATTRIBUTE};

use super::{PruneContext, ALWAYS_KEPT_TAGS};

const FORM_TAGS: &[&str] = &["input", "fieldset"];

fn visit(
    context: &mut PruneContext<'_>,
    node: NodeId,
    removed: &mut usize,
) -> Result<(), SimplifyError> {
    for child in context.document.element_children(node) {
        visit(context, child, removed)?;
    }

    let unattributed = context
        .document
        .element(node)
        .is_some_and(|element| element.has_only_attribute(ID_ATTRIBUTE));
    if unattributed
        && !context.document.has_tag(node, ALWAYS_KEPT_TAGS)
        && !context.document.has_tag(node, FORM_TAGS)
        && context.is_bare_leaf(node)
        && context.remove_node(node)?
    {
        *removed += 1;
    }
    Ok(())
}

/// Bottom-up removal of empty elements carrying at most an identifier.
pub(super) fn remove_attributeless_wrappers(
    context: &mut PruneContext<'_>,
) -> Result<usize, SimplifyError> {
    let mut removed = 0;
    let body = context.body;
    visit(context, body, &mut removed)?;
    Ok(removed)
}
