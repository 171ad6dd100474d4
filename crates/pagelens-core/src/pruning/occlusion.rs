//! Occlusion tagging.
//!
//! Elements whose center point hits something else on the live page are
//! kept in the tree but lose their identifier, so they cannot be targeted.

use pagelens_dom::{Document, RenderQuery};
use pagelens_protocols::{SimplifyError, CURRENTLY_OBSCURED_ATTRIBUTE, ID_ATTRIBUTE};

use super::PruneContext;
use crate::visibility::is_occluded;

pub(super) fn tag_occluded<R>(
    context: &mut PruneContext<'_>,
    live: &Document,
    render: &R,
) -> Result<usize, SimplifyError>
where
    R: RenderQuery + ?Sized,
{
    let mut tagged = 0;
    for node in context.document.descendant_elements(context.body) {
        let Some(bbox) = context.bbox_of(node) else {
            continue;
        };
        let Some(id) = context.document.attribute(node, ID_ATTRIBUTE).map(str::to_string) else {
            continue;
        };
        if is_occluded(live, render, &id, &bbox)? {
            context
                .document
                .set_attribute(node, CURRENTLY_OBSCURED_ATTRIBUTE, "true")?;
            context.strip_identifier(node)?;
            tagged += 1;
        }
    }
    Ok(tagged)
}
