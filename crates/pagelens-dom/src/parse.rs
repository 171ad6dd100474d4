//! HTML parsing into the arena document.

use scraper::{Html, Node};
use tracing::debug;

use crate::document::Document;
use crate::node::{Namespace, NodeId};

/// Parse a full HTML document.
///
/// The html5ever tree builder always produces `html`, `head` and `body`, so
/// the result has a body even for fragments.
pub fn parse_html(source: &str) -> Document {
    let html = Html::parse_document(source);
    let mut document = Document::new();
    let mut stack = vec![(html.tree.root(), document.root())];

    while let Some((source_node, parent)) = stack.pop() {
        for child in source_node.children() {
            let Some(copy) = convert_node(&mut document, child.value()) else {
                continue;
            };
            // Freshly created nodes cannot form cycles; failures mean a bug in conversion.
            if let Err(err) = document.append_child(parent, copy) {
                debug!(error = %err, "Skipping node that could not be attached");
                continue;
            }
            stack.push((child, copy));
        }
    }

    debug!(nodes = document.arena_len(), "Parsed HTML document");
    document
}

fn convert_node(document: &mut Document, node: &Node) -> Option<NodeId> {
    match node {
        Node::Element(element) => {
            let namespace = Namespace::from_uri(&element.name.ns);
            let id = document.create_element(element.name(), namespace);
            if let Some(data) = document.element_mut(id) {
                for (name, value) in element.attrs() {
                    data.set_attribute(name, value);
                }
            }
            Some(id)
        }
        Node::Text(text) => Some(document.create_text(&**text)),
        Node::Comment(comment) => Some(document.create_comment(&**comment)),
        Node::Doctype(doctype) => Some(document.create_doctype(doctype.name())),
        _ => None,
    }
}
