//! Text-only span unwrapping.

use pagelens_protocols::SimplifyError;

use super::PruneContext;

const INTERACTIVE_ROLES: &[&str] = &["link", "button"];

/// Replace `span`/`sub` elements holding a single text node with that text.
pub(super) fn unwrap_text_spans(context: &mut PruneContext<'_>) -> Result<usize, SimplifyError> {
    let mut unwrapped = 0;
    let spans = context.document.elements_by_tag(context.body, &["span", "sub"]);

    for span in spans {
        let Some(parent) = context.document.parent(span) else {
            continue;
        };
        let only_text = match context.document.children(span) {
            [child] => context.document.is_text(*child),
            _ => false,
        };
        let interactive = context
            .document
            .attribute(span, "role")
            .is_some_and(|role| INTERACTIVE_ROLES.contains(&role));
        if !only_text || interactive {
            continue;
        }

        let text: String = context
            .document
            .text_content(span)
            .chars()
            .filter(|c| *c != '\n' && *c != '\r')
            .collect();
        context.forget_element(span);
        let replacement = context.document.create_text(text);
        context.document.replace_child(parent, replacement, span)?;
        unwrapped += 1;
    }
    Ok(unwrapped)
}
