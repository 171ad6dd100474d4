//! Detached copy of the subtree being simplified.

use pagelens_dom::{Document, Namespace, NodeId};
use pagelens_protocols::{DomError, SimplifyError};

use crate::annotations::Annotations;

/// A cloned subtree inside a fresh `html` > `body` document.
#[derive(Debug)]
pub struct ClonedPage {
    pub document: Document,
    pub body: NodeId,
}

/// Copy `root` out of `live` into a new document and apply `annotations`.
///
/// When `root` is itself a `body` the copy becomes the new body; any other
/// element is wrapped in a synthetic one.
pub fn clone_for_pruning(
    live: &Document,
    root: NodeId,
    annotations: &Annotations,
) -> Result<ClonedPage, SimplifyError> {
    let Some(root_element) = live.element(root) else {
        return Err(DomError::NotAnElement(root.index()).into());
    };
    let root_is_body = root_element.name == "body";

    let mut document = Document::new();
    let html = document.create_element("html", Namespace::Html);
    document.append_child(document.root(), html)?;

    let copy = document.import_subtree(live, root, |source, element| {
        if let Some(attributes) = annotations.get(&source) {
            for attribute in attributes {
                element.set_attribute(&attribute.name, attribute.value.as_str());
            }
        }
    })?;

    let body = if root_is_body {
        copy
    } else {
        let body = document.create_element("body", Namespace::Html);
        document.append_child(body, copy)?;
        body
    };
    document.append_child(html, body)?;

    Ok(ClonedPage { document, body })
}
