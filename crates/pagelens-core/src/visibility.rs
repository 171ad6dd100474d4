//! Visibility classification.
//!
//! Every check works from the geometry recorded on the live tree, looked up
//! through the element's identifier. Cloned elements have no layout of their
//! own.

use pagelens_dom::{Document, ElementData, RenderQuery};
use pagelens_protocols::{
    BoundingBox, IdToBboxMap, InvisibleIdSet, RenderError, ViewportInfo, ID_ATTRIBUTE,
};

/// Recorded box of an element, if it carries an identifier with an entry.
pub fn recorded_bbox<'a>(element: &ElementData, bboxes: &'a IdToBboxMap) -> Option<&'a BoundingBox> {
    element
        .attribute(ID_ATTRIBUTE)
        .and_then(|id| bboxes.get(id))
}

/// `option`/`optgroup` with no rendered area.
///
/// Elements without a recorded box count as zero area.
pub fn is_intrinsically_invisible(element: &ElementData, bboxes: &IdToBboxMap) -> bool {
    if !matches!(element.name.as_str(), "option" | "optgroup") {
        return false;
    }
    recorded_bbox(element, bboxes).is_none_or(BoundingBox::is_zero_area)
}

/// Whether an element should be treated as off-screen.
///
/// The body never is. Elements without an identifier or recorded box always
/// are. Otherwise only a box leaving `viewport` counts, and only when a
/// viewport restriction is given.
pub fn is_offscreen(
    element: &ElementData,
    bboxes: &IdToBboxMap,
    viewport: Option<&ViewportInfo>,
) -> bool {
    if element.name == "body" {
        return false;
    }
    let Some(bbox) = recorded_bbox(element, bboxes) else {
        return true;
    };
    viewport.is_some_and(|viewport| !bbox.is_within_viewport(viewport))
}

/// Recorded box with no area that still lies inside the viewport.
pub fn is_onscreen_zero_area(
    element: &ElementData,
    bboxes: &IdToBboxMap,
    viewport: &ViewportInfo,
) -> bool {
    recorded_bbox(element, bboxes)
        .is_some_and(|bbox| bbox.is_zero_area() && bbox.is_within_viewport(viewport))
}

/// Hidden by CSS on the live tree.
pub fn is_explicitly_invisible(element: &ElementData, invisible: &InvisibleIdSet) -> bool {
    element
        .attribute(ID_ATTRIBUTE)
        .is_some_and(|id| invisible.contains(id))
}

/// Hit-test the live document at the center of `bbox` and check whether the
/// element identified by `id` is among the hits.
pub fn is_occluded<R>(
    live: &Document,
    render: &R,
    id: &str,
    bbox: &BoundingBox,
) -> Result<bool, RenderError>
where
    R: RenderQuery + ?Sized,
{
    let (x, y) = bbox.center();
    let hits = render.elements_at_point(x, y)?;
    Ok(!hits
        .into_iter()
        .any(|hit| live.attribute(hit, ID_ATTRIBUTE) == Some(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelens_dom::{parse_html, Namespace, StaticRenderer};

    fn element(name: &str, id: Option<&str>) -> ElementData {
        let mut data = ElementData::new(name, Namespace::Html);
        if let Some(id) = id {
            data.set_attribute(ID_ATTRIBUTE, id);
        }
        data
    }

    fn viewport() -> ViewportInfo {
        ViewportInfo { width: 100, height: 100 }
    }

    #[test]
    fn test_intrinsically_invisible_option() {
        let mut bboxes = IdToBboxMap::new();
        bboxes.insert("1", BoundingBox::new(0.0, 0.0, 0.0, 10.0));
        bboxes.insert("2", BoundingBox::new(0.0, 0.0, 10.0, 10.0));

        assert!(is_intrinsically_invisible(&element("option", Some("1")), &bboxes));
        assert!(!is_intrinsically_invisible(&element("option", Some("2")), &bboxes));
        assert!(is_intrinsically_invisible(&element("optgroup", None), &bboxes));
        assert!(!is_intrinsically_invisible(&element("div", Some("1")), &bboxes));
    }

    #[test]
    fn test_offscreen_rules() {
        let mut bboxes = IdToBboxMap::new();
        bboxes.insert("1", BoundingBox::new(90.0, 0.0, 20.0, 10.0));
        bboxes.insert("2", BoundingBox::new(10.0, 10.0, 20.0, 10.0));

        assert!(!is_offscreen(&element("body", None), &bboxes, Some(&viewport())));
        assert!(is_offscreen(&element("div", None), &bboxes, None));
        assert!(is_offscreen(&element("div", Some("9")), &bboxes, None));
        assert!(is_offscreen(&element("div", Some("1")), &bboxes, Some(&viewport())));
        assert!(!is_offscreen(&element("div", Some("1")), &bboxes, None));
        assert!(!is_offscreen(&element("div", Some("2")), &bboxes, Some(&viewport())));
    }

    #[test]
    fn test_onscreen_zero_area() {
        let mut bboxes = IdToBboxMap::new();
        bboxes.insert("1", BoundingBox::new(10.0, 10.0, 0.0, 0.0));
        bboxes.insert("2", BoundingBox::new(-10.0, 10.0, 0.0, 5.0));
        bboxes.insert("3", BoundingBox::new(10.0, 10.0, 5.0, 5.0));

        assert!(is_onscreen_zero_area(&element("div", Some("1")), &bboxes, &viewport()));
        assert!(!is_onscreen_zero_area(&element("div", Some("2")), &bboxes, &viewport()));
        assert!(!is_onscreen_zero_area(&element("div", Some("3")), &bboxes, &viewport()));
        assert!(!is_onscreen_zero_area(&element("div", None), &bboxes, &viewport()));
    }

    #[test]
    fn test_explicitly_invisible() {
        let invisible: InvisibleIdSet = ["4".to_string()].into_iter().collect();
        assert!(is_explicitly_invisible(&element("div", Some("4")), &invisible));
        assert!(!is_explicitly_invisible(&element("div", Some("5")), &invisible));
        assert!(!is_explicitly_invisible(&element("div", None), &invisible));
    }

    #[test]
    fn test_occlusion_by_overlay() {
        let doc = parse_html(
            r#"<button nova-act-id="1">Go</button><div nova-act-id="2">overlay</div>"#,
        );
        let button = doc.find_element(|el| el.name == "button").unwrap();
        let overlay = doc.find_element(|el| el.name == "div").unwrap();
        let rect = BoundingBox::new(10.0, 10.0, 50.0, 20.0);
        let mut render = StaticRenderer::new(&doc, viewport());
        render.set_rect(button, rect);
        assert!(!is_occluded(&doc, &render, "1", &rect).unwrap());

        render.set_rect(overlay, BoundingBox::new(0.0, 0.0, 100.0, 100.0));
        render.layout_mut(overlay).style.z_index = 10;
        // Still hit underneath the overlay.
        assert!(!is_occluded(&doc, &render, "1", &rect).unwrap());

        render.layout_mut(button).style.pointer_events = "none".to_string();
        assert!(is_occluded(&doc, &render, "1", &rect).unwrap());
    }
}
