//! Attribute allow-listing.

use std::collections::HashSet;

use pagelens_dom::NodeId;
use pagelens_protocols::{
    is_aria_attribute, SimplifyError, SimplifyOptions, CORE_ATTRIBUTES_TO_KEEP, ID_ATTRIBUTE,
};

use super::{PruneContext, ALWAYS_KEPT_TAGS};

struct AttributeFilter<'a> {
    keep: HashSet<&'a str>,
    remove: HashSet<&'a str>,
}

impl<'a> AttributeFilter<'a> {
    fn new(options: &'a SimplifyOptions) -> Self {
        let keep = CORE_ATTRIBUTES_TO_KEEP
            .iter()
            .copied()
            .chain(options.additional_attributes_to_keep.iter().map(String::as_str))
            .collect();
        let remove = options
            .attributes_to_remove
            .iter()
            .map(String::as_str)
            .collect();
        Self { keep, remove }
    }

    /// Explicit removals win; ARIA attributes survive; anything else needs
    /// to be allow-listed and carry a value.
    fn drops(&self, name: &str, value: &str) -> bool {
        self.remove.contains(name)
            || (!is_aria_attribute(name) && !(self.keep.contains(name) && !value.is_empty()))
    }

    fn visit(
        &self,
        context: &mut PruneContext<'_>,
        node: NodeId,
        removed: &mut usize,
    ) -> Result<(), SimplifyError> {
        let doomed: Vec<String> = context
            .document
            .attributes(node)
            .iter()
            .filter(|attr| self.drops(&attr.name, &attr.value))
            .map(|attr| attr.name.clone())
            .collect();
        for name in doomed {
            if name == ID_ATTRIBUTE {
                context.strip_identifier(node)?;
            } else {
                context.document.remove_attribute(node, &name)?;
            }
        }

        if context.document.attributes(node).is_empty()
            && !context.document.has_tag(node, ALWAYS_KEPT_TAGS)
            && context.is_bare_leaf(node)
        {
            if context.remove_node(node)? {
                *removed += 1;
            }
            return Ok(());
        }

        for child in context.document.element_children(node) {
            self.visit(context, child, removed)?;
        }
        Ok(())
    }
}

/// Strip attributes top-down, then drop elements left with nothing to show.
pub(super) fn strip_attributes(
    context: &mut PruneContext<'_>,
    options: &SimplifyOptions,
) -> Result<usize, SimplifyError> {
    let filter = AttributeFilter::new(options);
    let mut removed = 0;
    let body = context.body;
    filter.visit(context, body, &mut removed)?;
    Ok(removed)
}
