//! Script, noscript and style removal.

use pagelens_protocols::SimplifyError;

use super::PruneContext;

/// Remove `style` elements, plus `script`/`noscript` unless they are kept.
pub(super) fn strip_scripts_and_styles(
    context: &mut PruneContext<'_>,
    include_scripts: bool,
) -> Result<usize, SimplifyError> {
    let tags: &[&str] = if include_scripts {
        &["style"]
    } else {
        &["script", "noscript", "style"]
    };

    let scope = context.document.root();
    let mut removed = 0;
    for node in context.document.elements_by_tag(scope, tags) {
        if context.document.is_attached(node) && context.remove_node(node)? {
            removed += 1;
        }
    }
    Ok(removed)
}
