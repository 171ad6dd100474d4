//! Comment removal.

use pagelens_protocols::SimplifyError;

use super::PruneContext;

pub(super) fn remove_comments(context: &mut PruneContext<'_>) -> Result<usize, SimplifyError> {
    let comments: Vec<_> = context
        .document
        .descendants(context.body)
        .into_iter()
        .filter(|node| context.document.is_comment(*node))
        .collect();
    for node in &comments {
        context.document.detach(*node)?;
    }
    Ok(comments.len())
}
