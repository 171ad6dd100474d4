//! Graphics content stripping.
//!
//! `svg`, `g` and `img` keep only their own element; path data and other
//! children carry nothing useful as text.

use pagelens_protocols::{is_aria_attribute, SimplifyError, CORE_ATTRIBUTES_TO_KEEP};

use super::PruneContext;

const GRAPHICS_TAGS: &[&str] = &["svg", "g", "img"];

pub(super) fn strip_graphics(context: &mut PruneContext<'_>) -> Result<usize, SimplifyError> {
    let mut stripped = 0;
    let graphics = context.document.elements_by_tag(context.body, GRAPHICS_TAGS);

    for node in graphics {
        if !context.document.is_attached(node) {
            continue;
        }
        for child in context.document.children(node).to_vec() {
            context.remove_node(child)?;
        }
        if let Some(element) = context.document.element_mut(node) {
            element.attributes.retain(|attr| {
                CORE_ATTRIBUTES_TO_KEEP.contains(&attr.name.as_str()) || is_aria_attribute(&attr.name)
            });
        }
        stripped += 1;
    }
    Ok(stripped)
}
