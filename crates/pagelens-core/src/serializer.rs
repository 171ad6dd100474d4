//! Indented pseudo-HTML rendering of the pruned tree.
//!
//! One element or text run per line, two spaces per depth level. Attribute
//! values are quoted with `'` and not escaped.

use pagelens_dom::{Document, ElementData, NodeId, NodeKind};
use pagelens_protocols::SCROLLABLE_ATTRIBUTE;

const INDENT: &str = "  ";

fn opening_tag(element: &ElementData) -> String {
    let mut tag = format!("<{}", element.name);
    for attr in &element.attributes {
        if attr.name == SCROLLABLE_ATTRIBUTE {
            if attr.value == "true" {
                tag.push_str(" scrollable");
            }
        } else {
            tag.push_str(&format!(" {}='{}'", attr.name, attr.value));
        }
    }
    tag
}

/// No children, or only whitespace text.
fn renders_empty(document: &Document, node: NodeId) -> bool {
    document.children(node).iter().all(|child| {
        matches!(document.kind(*child), Some(NodeKind::Text(text)) if text.trim().is_empty())
    })
}

fn write_node(document: &Document, node: NodeId, depth: usize, output: &mut String) {
    let indent = INDENT.repeat(depth);
    match document.kind(node) {
        Some(NodeKind::Element(element)) => {
            let tag = opening_tag(element);
            if renders_empty(document, node) {
                output.push_str(&format!("{}{}/>\n", indent, tag));
                return;
            }
            output.push_str(&format!("{}{}>\n", indent, tag));
            for child in document.children(node) {
                write_node(document, *child, depth + 1, output);
            }
            output.push_str(&format!("{}</{}>\n", indent, element.name));
        }
        Some(NodeKind::Text(text)) => {
            let text = text.trim();
            if !text.is_empty() {
                output.push_str(&format!("{}{}\n", indent, text));
            }
        }
        _ => {}
    }
}

/// Render `node` and its subtree.
pub fn serialize(document: &Document, node: NodeId) -> String {
    let mut output = String::new();
    write_node(document, node, 0, &mut output);
    output
}
