//! Stable element identifiers on the live tree.
//!
//! Identifiers are persisted as the [`ID_ATTRIBUTE`] attribute of live
//! elements so later invocations on the same page reuse them. New values are
//! allocated above the largest numeric identifier already present.

use tracing::debug;

use pagelens_dom::{Document, NodeId, RenderQuery};
use pagelens_protocols::{IdToBboxMap, InvisibleIdSet, SimplifyError, ID_ATTRIBUTE};

use crate::geometry::bounding_box;

/// Leading integer of an identifier, the way `parseInt(value, 10)` reads it.
fn numeric_prefix(value: &str) -> Option<u64> {
    let trimmed = value.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX - 1))
}

/// First identifier value that is free in the subtree rooted at `root`.
pub fn next_identifier(document: &Document, root: NodeId) -> u64 {
    document
        .descendant_elements(root)
        .into_iter()
        .filter_map(|node| document.attribute(node, ID_ATTRIBUTE))
        .filter_map(numeric_prefix)
        .map(|value| value.saturating_add(1))
        .fold(1, u64::max)
}

/// Give every element under `root` an identifier and record its geometry.
///
/// Elements hidden by CSS are collected into `invisible`. Returns the number
/// of identifiers allocated by this call.
pub fn assign_identifiers<R>(
    document: &mut Document,
    render: &R,
    root: NodeId,
    bboxes: &mut IdToBboxMap,
    invisible: &mut InvisibleIdSet,
) -> Result<usize, SimplifyError>
where
    R: RenderQuery + ?Sized,
{
    let mut next = next_identifier(document, root);
    let mut allocated = 0;

    for node in document.descendant_elements(root) {
        let bbox = bounding_box(render, node)?;
        let existing = document
            .attribute(node, ID_ATTRIBUTE)
            .filter(|value| !value.is_empty());
        let id = match existing {
            Some(existing) => existing.to_string(),
            None => {
                let id = next.to_string();
                document.set_attribute(node, ID_ATTRIBUTE, id.as_str())?;
                next = next.saturating_add(1);
                allocated += 1;
                id
            }
        };
        bboxes.insert(id.as_str(), bbox);

        if render.computed_style(node)?.is_marked_invisible() {
            invisible.insert(id);
        }
    }

    debug!(
        recorded = bboxes.len(),
        allocated,
        invisible = invisible.len(),
        "Assigned element identifiers"
    );
    Ok(allocated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelens_dom::{parse_html, StaticRenderer};
    use pagelens_protocols::{BoundingBox, ViewportInfo};

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(numeric_prefix("12"), Some(12));
        assert_eq!(numeric_prefix(" 7abc"), Some(7));
        assert_eq!(numeric_prefix("+3"), Some(3));
        assert_eq!(numeric_prefix("-3"), None);
        assert_eq!(numeric_prefix("abc"), None);
        assert_eq!(numeric_prefix(""), None);
    }

    #[test]
    fn test_next_identifier_empty_tree() {
        let doc = parse_html("<div></div>");
        assert_eq!(next_identifier(&doc, doc.body().unwrap()), 1);
    }

    #[test]
    fn test_next_identifier_above_maximum() {
        let doc = parse_html(r#"<div nova-act-id="4"></div><p nova-act-id="9"></p><i nova-act-id="x"></i>"#);
        assert_eq!(next_identifier(&doc, doc.body().unwrap()), 10);
    }

    #[test]
    fn test_assign_identifiers_pre_order() {
        let mut doc = parse_html("<div><span></span></div><p></p>");
        let body = doc.body().unwrap();
        let render = StaticRenderer::new(&doc, ViewportInfo::default());
        let mut bboxes = IdToBboxMap::new();
        let mut invisible = InvisibleIdSet::new();

        let allocated =
            assign_identifiers(&mut doc, &render, body, &mut bboxes, &mut invisible).unwrap();

        assert_eq!(allocated, 4);
        let ids: Vec<_> = doc
            .descendant_elements(body)
            .into_iter()
            .map(|node| doc.attribute(node, ID_ATTRIBUTE).unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(bboxes.len(), 4);
        assert!(invisible.is_empty());
    }

    #[test]
    fn test_assign_identifiers_reuses_existing() {
        let mut doc = parse_html(r#"<div nova-act-id="5"></div><p></p>"#);
        let body = doc.body().unwrap();
        let div = doc.find_element(|el| el.name == "div").unwrap();
        let mut render = StaticRenderer::new(&doc, ViewportInfo::default());
        render.set_rect(div, BoundingBox::new(1.0, 2.0, 3.0, 4.0));
        let mut bboxes = IdToBboxMap::new();
        let mut invisible = InvisibleIdSet::new();

        assign_identifiers(&mut doc, &render, body, &mut bboxes, &mut invisible).unwrap();

        assert_eq!(doc.attribute(body, ID_ATTRIBUTE), Some("6"));
        assert_eq!(doc.attribute(div, ID_ATTRIBUTE), Some("5"));
        let p = doc.find_element(|el| el.name == "p").unwrap();
        assert_eq!(doc.attribute(p, ID_ATTRIBUTE), Some("7"));
        assert_eq!(bboxes.get("5"), Some(&BoundingBox::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_assign_identifiers_replaces_empty_values() {
        let mut doc = parse_html(r#"<button nova-act-id="">Go</button><a href="/x" nova-act-id="">X</a>"#);
        let body = doc.body().unwrap();
        let button = doc.find_element(|el| el.name == "button").unwrap();
        let link = doc.find_element(|el| el.name == "a").unwrap();
        let render = StaticRenderer::new(&doc, ViewportInfo::default());
        let mut bboxes = IdToBboxMap::new();
        let mut invisible = InvisibleIdSet::new();

        let allocated =
            assign_identifiers(&mut doc, &render, body, &mut bboxes, &mut invisible).unwrap();

        assert_eq!(allocated, 3);
        assert_eq!(doc.attribute(button, ID_ATTRIBUTE), Some("2"));
        assert_eq!(doc.attribute(link, ID_ATTRIBUTE), Some("3"));
        assert!(!bboxes.contains(""));
        assert_eq!(bboxes.len(), 3);
    }

    #[test]
    fn test_assign_identifiers_saturates_at_maximum() {
        let huge = u64::MAX.to_string();
        let source = format!(r#"<div nova-act-id="{huge}"></div><p></p><i></i>"#);
        let mut doc = parse_html(&source);
        let body = doc.body().unwrap();
        let render = StaticRenderer::new(&doc, ViewportInfo::default());
        let mut bboxes = IdToBboxMap::new();

        let allocated = assign_identifiers(
            &mut doc,
            &render,
            body,
            &mut bboxes,
            &mut InvisibleIdSet::new(),
        )
        .unwrap();

        assert_eq!(allocated, 3);
        let p = doc.find_element(|el| el.name == "p").unwrap();
        assert_eq!(doc.attribute(p, ID_ATTRIBUTE), Some(u64::MAX.to_string().as_str()));
    }

    #[test]
    fn test_assign_identifiers_collects_invisible() {
        let mut doc = parse_html("<div id='hidden'></div><div id='shown'></div>");
        let body = doc.body().unwrap();
        let hidden = doc.element_by_html_id("hidden").unwrap();
        let mut render = StaticRenderer::new(&doc, ViewportInfo::default());
        render.layout_mut(hidden).style.display = "none".to_string();
        let mut bboxes = IdToBboxMap::new();
        let mut invisible = InvisibleIdSet::new();

        assign_identifiers(&mut doc, &render, body, &mut bboxes, &mut invisible).unwrap();

        let hidden_id = doc.attribute(hidden, ID_ATTRIBUTE).unwrap();
        assert_eq!(invisible.len(), 1);
        assert!(invisible.contains(hidden_id));
    }

    #[test]
    fn test_assign_identifiers_is_stable() {
        let mut doc = parse_html("<div><a href='/x'>x</a></div>");
        let body = doc.body().unwrap();
        let render = StaticRenderer::new(&doc, ViewportInfo::default());

        let mut first = IdToBboxMap::new();
        assign_identifiers(&mut doc, &render, body, &mut first, &mut InvisibleIdSet::new())
            .unwrap();
        let mut second = IdToBboxMap::new();
        let allocated =
            assign_identifiers(&mut doc, &render, body, &mut second, &mut InvisibleIdSet::new())
                .unwrap();

        assert_eq!(allocated, 0);
        assert_eq!(first, second);
    }
}
