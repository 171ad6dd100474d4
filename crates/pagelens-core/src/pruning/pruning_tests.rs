use super::*;
use crate::annotations::Annotations;
use crate::cloner::clone_for_pruning;
use crate::serializer::serialize;
use pagelens_dom::{parse_html, StaticRenderer};
use pagelens_protocols::ViewportInfo;

fn clone_of(html: &str) -> ClonedPage {
    let live = parse_html(html);
    clone_for_pruning(&live, live.body().unwrap(), &Annotations::new()).unwrap()
}

fn render(context: &PruneContext<'_>) -> String {
    serialize(context.document(), context.body())
}

fn boxed(x: f64, y: f64) -> BoundingBox {
    BoundingBox::new(x, y, 10.0, 10.0)
}

fn table(entries: &[(&str, BoundingBox)]) -> IdToBboxMap {
    let mut bboxes = IdToBboxMap::new();
    for (id, bbox) in entries {
        bboxes.insert(*id, *bbox);
    }
    bboxes
}

fn viewport() -> ViewportInfo {
    ViewportInfo { width: 100, height: 100 }
}

// ============================================================================
// Context
// ============================================================================

#[test]
fn test_remove_node_forgets_subtree_ids() {
    let mut bboxes = table(&[("1", boxed(0.0, 0.0)), ("2", boxed(0.0, 0.0)), ("3", boxed(0.0, 0.0))]);
    let mut context = PruneContext::new(
        clone_of(r#"<div nova-act-id="1"><p nova-act-id="2">x</p></div><a nova-act-id="3">y</a>"#),
        Some(&mut bboxes),
    );
    let div = context.document().find_element(|el| el.name == "div").unwrap();

    assert!(context.remove_node(div).unwrap());
    assert!(!context.document().is_attached(div));
    drop(context);
    assert_eq!(bboxes.ids().collect::<Vec<_>>(), vec!["3"]);
}

#[test]
fn test_body_is_never_removed() {
    let mut context = PruneContext::new(clone_of("<p>x</p>"), None);
    let body = context.body();
    assert!(!context.remove_node(body).unwrap());
    assert!(context.document().is_attached(body));
}

#[test]
fn test_bbox_of_requires_table() {
    let context = PruneContext::new(clone_of(r#"<p nova-act-id="1">x</p>"#), None);
    let p = context.document().find_element(|el| el.name == "p").unwrap();
    assert!(!context.has_geometry());
    assert_eq!(context.bbox_of(p), None);
}

// ============================================================================
// Scripts and styles
// ============================================================================

#[test]
fn test_strip_scripts_and_styles() {
    let mut context = PruneContext::new(
        clone_of("<p>t</p><script>run()</script><noscript>off</noscript><style>p{}</style>"),
        None,
    );
    let removed = scripts::strip_scripts_and_styles(&mut context, false).unwrap();
    assert_eq!(removed, 3);
    assert_eq!(render(&context), "<body>\n  <p>\n    t\n  </p>\n</body>\n");
}

#[test]
fn test_include_scripts_keeps_scripts() {
    let mut context = PruneContext::new(clone_of("<p>t</p><script>run()</script><style>p{}</style>"), None);
    let removed = scripts::strip_scripts_and_styles(&mut context, true).unwrap();
    assert_eq!(removed, 1);
    assert!(context.document().find_element(|el| el.name == "script").is_some());
}

// ============================================================================
// Invisible leaves
// ============================================================================

#[test]
fn test_explicitly_invisible_subtree_removed() {
    let mut bboxes = table(&[
        ("1", boxed(0.0, 0.0)),
        ("2", boxed(0.0, 0.0)),
        ("3", boxed(20.0, 20.0)),
    ]);
    let invisible: InvisibleIdSet = ["1".to_string()].into_iter().collect();
    let mut context = PruneContext::new(
        clone_of(r#"<div nova-act-id="1"><span nova-act-id="2">hidden</span></div><p nova-act-id="3">shown</p>"#),
        Some(&mut bboxes),
    );

    invisible::remove_invisible_leaves(&mut context, &invisible, &viewport(), true).unwrap();

    assert!(context.document().find_element(|el| el.name == "div").is_none());
    assert!(context.document().find_element(|el| el.name == "p").is_some());
    drop(context);
    assert_eq!(bboxes.ids().collect::<Vec<_>>(), vec!["3"]);
}

#[test]
fn test_offscreen_leaf_depends_on_viewport_restriction() {
    let html = r#"<p nova-act-id="1">a</p><p nova-act-id="2">b</p>"#;
    let entries = [("1", boxed(0.0, 0.0)), ("2", boxed(500.0, 0.0))];

    let mut bboxes = table(&entries);
    let mut context = PruneContext::new(clone_of(html), Some(&mut bboxes));
    invisible::remove_invisible_leaves(&mut context, &InvisibleIdSet::new(), &viewport(), true)
        .unwrap();
    assert_eq!(context.document().elements_by_tag(context.body(), &["p"]).len(), 1);

    let mut bboxes = table(&entries);
    let mut context = PruneContext::new(clone_of(html), Some(&mut bboxes));
    invisible::remove_invisible_leaves(&mut context, &InvisibleIdSet::new(), &viewport(), false)
        .unwrap();
    assert_eq!(context.document().elements_by_tag(context.body(), &["p"]).len(), 2);
}

#[test]
fn test_offscreen_container_with_visible_child_kept() {
    let mut bboxes = table(&[("1", BoundingBox::new(0.0, 0.0, 400.0, 400.0)), ("2", boxed(5.0, 5.0))]);
    let mut context = PruneContext::new(
        clone_of(r#"<div nova-act-id="1"><a nova-act-id="2" href="/x">x</a></div>"#),
        Some(&mut bboxes),
    );
    invisible::remove_invisible_leaves(&mut context, &InvisibleIdSet::new(), &viewport(), true)
        .unwrap();
    assert!(context.document().find_element(|el| el.name == "div").is_some());
    assert!(context.document().find_element(|el| el.name == "a").is_some());
}

#[test]
fn test_elements_without_identifier_are_offscreen() {
    let mut bboxes = IdToBboxMap::new();
    let mut context = PruneContext::new(clone_of("<div><b>x</b></div>"), Some(&mut bboxes));
    let removed =
        invisible::remove_invisible_leaves(&mut context, &InvisibleIdSet::new(), &viewport(), false)
            .unwrap();
    assert_eq!(removed, 2);
    assert_eq!(render(&context), "<body/>\n");
}

#[test]
fn test_zero_area_element_is_squashed() {
    let mut bboxes = table(&[("1", BoundingBox::new(10.0, 10.0, 0.0, 0.0)), ("2", boxed(10.0, 10.0))]);
    let mut context = PruneContext::new(
        clone_of(r#"<div nova-act-id="1">lead<p nova-act-id="2">x</p></div>"#),
        Some(&mut bboxes),
    );
    invisible::remove_invisible_leaves(&mut context, &InvisibleIdSet::new(), &viewport(), true)
        .unwrap();

    let body = context.body();
    let children = context.document().children(body).to_vec();
    assert_eq!(children.len(), 2);
    assert!(context.document().is_text(children[0]));
    assert_eq!(context.document().tag_name(children[1]), Some("p"));
    drop(context);
    assert!(!bboxes.contains("1"));
}

#[test]
fn test_zero_area_options_removed() {
    let mut bboxes = table(&[
        ("1", BoundingBox::new(0.0, 0.0, 50.0, 20.0)),
        ("2", BoundingBox::new(0.0, 0.0, 0.0, 0.0)),
    ]);
    let mut context = PruneContext::new(
        clone_of(r#"<select nova-act-id="1"><option nova-act-id="2">a</option></select>"#),
        Some(&mut bboxes),
    );
    invisible::remove_invisible_leaves(&mut context, &InvisibleIdSet::new(), &viewport(), true)
        .unwrap();
    assert!(context.document().find_element(|el| el.name == "option").is_none());
    assert!(context.document().find_element(|el| el.name == "select").is_some());
}

// ============================================================================
// Occlusion
// ============================================================================

#[test]
fn test_occluded_element_tagged_not_removed() {
    let live = parse_html(r#"<button nova-act-id="1">Go</button><a nova-act-id="2" href="/">Home</a>"#);
    let button = live.find_element(|el| el.name == "button").unwrap();
    let link = live.find_element(|el| el.name == "a").unwrap();
    let mut renderer = StaticRenderer::new(&live, viewport());
    renderer.set_rect(button, boxed(0.0, 0.0));
    renderer.set_rect(link, boxed(20.0, 0.0));
    renderer.layout_mut(button).style.pointer_events = "none".to_string();

    let mut bboxes = table(&[("1", boxed(0.0, 0.0)), ("2", boxed(20.0, 0.0))]);
    let page = clone_for_pruning(&live, live.body().unwrap(), &Annotations::new()).unwrap();
    let mut context = PruneContext::new(page, Some(&mut bboxes));

    let tagged = occlusion::tag_occluded(&mut context, &live, &renderer).unwrap();

    assert_eq!(tagged, 1);
    let copy = context.document().find_element(|el| el.name == "button").unwrap();
    assert_eq!(context.document().attribute(copy, "currently-obscured"), Some("true"));
    assert_eq!(context.document().attribute(copy, ID_ATTRIBUTE), None);
    drop(context);
    assert_eq!(bboxes.ids().collect::<Vec<_>>(), vec!["2"]);
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn test_attribute_allow_list() {
    let mut context = PruneContext::new(
        clone_of(r#"<div class="x" nova-act-id="1" aria-label="L" title="" data-cy="c">t</div>"#),
        None,
    );
    attributes::strip_attributes(&mut context, &SimplifyOptions::default()).unwrap();

    let div = context.document().find_element(|el| el.name == "div").unwrap();
    let names: Vec<_> = context
        .document()
        .attributes(div)
        .iter()
        .map(|attr| attr.name.as_str())
        .collect();
    assert_eq!(names, vec!["nova-act-id", "aria-label", "data-cy"]);
}

#[test]
fn test_attribute_options() {
    let options = SimplifyOptions {
        additional_attributes_to_keep: vec!["class".to_string()],
        attributes_to_remove: vec!["aria-label".to_string(), ID_ATTRIBUTE.to_string()],
        ..Default::default()
    };
    let mut bboxes = table(&[("1", boxed(0.0, 0.0))]);
    let mut context = PruneContext::new(
        clone_of(r#"<div class="x" nova-act-id="1" aria-label="L">t</div>"#),
        Some(&mut bboxes),
    );
    attributes::strip_attributes(&mut context, &options).unwrap();

    let div = context.document().find_element(|el| el.name == "div").unwrap();
    assert_eq!(context.document().attribute(div, "class"), Some("x"));
    assert_eq!(context.document().attribute(div, "aria-label"), None);
    drop(context);
    assert!(bboxes.is_empty());
}

#[test]
fn test_attribute_stripping_drops_empty_leaves() {
    let mut context = PruneContext::new(
        clone_of(r#"<div class="x"></div><img class="y"><p class="z">text</p>"#),
        None,
    );
    let removed = attributes::strip_attributes(&mut context, &SimplifyOptions::default()).unwrap();
    assert_eq!(removed, 1);
    assert_eq!(
        render(&context),
        "<body>\n  <img/>\n  <p>\n    text\n  </p>\n</body>\n"
    );
}

// ============================================================================
// Wrappers
// ============================================================================

#[test]
fn test_attributeless_wrappers_removed_bottom_up() {
    let mut context = PruneContext::new(
        clone_of(r#"<div nova-act-id="1"><span nova-act-id="2"></span></div><input nova-act-id="3"><fieldset></fieldset>"#),
        None,
    );
    let removed = wrappers::remove_attributeless_wrappers(&mut context).unwrap();
    assert_eq!(removed, 2);
    assert_eq!(
        render(&context),
        "<body>\n  <input nova-act-id='3'/>\n  <fieldset/>\n</body>\n"
    );
}

#[test]
fn test_wrapper_with_other_attribute_kept() {
    let mut context = PruneContext::new(clone_of(r#"<div title="t"></div>"#), None);
    assert_eq!(wrappers::remove_attributeless_wrappers(&mut context).unwrap(), 0);
}

// ============================================================================
// Spans
// ============================================================================

#[test]
fn test_text_span_unwrapped() {
    let mut bboxes = table(&[("4", boxed(0.0, 0.0))]);
    let mut context = PruneContext::new(
        clone_of("<p><span nova-act-id=\"4\">Hello\nworld</span></p>"),
        Some(&mut bboxes),
    );
    assert_eq!(spans::unwrap_text_spans(&mut context).unwrap(), 1);
    assert_eq!(render(&context), "<body>\n  <p>\n    Helloworld\n  </p>\n</body>\n");
    drop(context);
    assert!(bboxes.is_empty());
}

#[test]
fn test_interactive_and_nested_spans_kept() {
    let mut context = PruneContext::new(
        clone_of(r#"<span role="button">Go</span><span><b>x</b></span><sub>2</sub>"#),
        None,
    );
    assert_eq!(spans::unwrap_text_spans(&mut context).unwrap(), 1);
    assert_eq!(context.document().elements_by_tag(context.body(), &["span"]).len(), 2);
    assert!(context.document().find_element(|el| el.name == "sub").is_none());
}

// ============================================================================
// Collapse
// ============================================================================

#[test]
fn test_single_child_chain_collapses() {
    let mut bboxes = table(&[("1", boxed(0.0, 0.0)), ("2", boxed(0.0, 0.0))]);
    let mut context = PruneContext::new(
        clone_of(r#"<div><div nova-act-id="1"><p nova-act-id="2">x</p></div></div>"#),
        Some(&mut bboxes),
    );
    assert_eq!(collapse::collapse_single_child_parents(&mut context).unwrap(), 2);
    assert_eq!(
        render(&context),
        "<body>\n  <p nova-act-id='2'>\n    x\n  </p>\n</body>\n"
    );
    drop(context);
    assert_eq!(bboxes.ids().collect::<Vec<_>>(), vec!["2"]);
}

#[test]
fn test_wrapper_with_direct_text_not_collapsed() {
    let mut context = PruneContext::new(clone_of("<div>label<p>x</p></div>"), None);
    assert_eq!(collapse::collapse_single_child_parents(&mut context).unwrap(), 0);
}

// ============================================================================
// Graphics, comments, empty sweep
// ============================================================================

#[test]
fn test_graphics_content_stripped() {
    let mut bboxes = table(&[("1", boxed(0.0, 0.0)), ("2", boxed(0.0, 0.0))]);
    let mut context = PruneContext::new(
        clone_of(r#"<svg nova-act-id="1" viewBox="0 0 1 1" aria-label="icon"><path nova-act-id="2" d="M0"/></svg>"#),
        Some(&mut bboxes),
    );
    assert_eq!(graphics::strip_graphics(&mut context).unwrap(), 1);
    assert_eq!(
        render(&context),
        "<body>\n  <svg nova-act-id='1' aria-label='icon'/>\n</body>\n"
    );
    drop(context);
    assert_eq!(bboxes.ids().collect::<Vec<_>>(), vec!["1"]);
}

#[test]
fn test_comments_removed() {
    let mut context = PruneContext::new(clone_of("<p>x<!-- b --></p><!-- a -->"), None);
    assert_eq!(comments::remove_comments(&mut context).unwrap(), 2);
    assert_eq!(render(&context), "<body>\n  <p>\n    x\n  </p>\n</body>\n");
}

#[test]
fn test_empty_sweep() {
    let mut context = PruneContext::new(
        clone_of(r#"<div title="t"></div><div title="a" role="b"></div><input><math></math>"#),
        None,
    );
    assert_eq!(empty::remove_empty_elements(&mut context).unwrap(), 1);
    assert_eq!(
        render(&context),
        "<body>\n  <div title='a' role='b'/>\n  <input/>\n  <math/>\n</body>\n"
    );
}

#[test]
fn test_empty_body_survives_sweep() {
    let mut context = PruneContext::new(clone_of(""), None);
    empty::remove_empty_elements(&mut context).unwrap();
    assert_eq!(render(&context), "<body/>\n");
}

// ============================================================================
// Full pipeline
// ============================================================================

#[test]
fn test_pipeline_without_geometry() {
    let live = parse_html(
        r#"<div class="outer"><div><p class="lead">Hello <span>there</span></p></div></div><script>x()</script>"#,
    );
    let renderer = StaticRenderer::new(&live, viewport());
    let page = clone_for_pruning(&live, live.body().unwrap(), &Annotations::new()).unwrap();
    let mut context = PruneContext::new(page, None);

    run_pipeline(
        &mut context,
        &live,
        &renderer,
        &InvisibleIdSet::new(),
        &SimplifyOptions::default(),
        false,
    )
    .unwrap();

    assert_eq!(
        render(&context),
        "<body>\n  <p>\n    Hello\n    there\n  </p>\n</body>\n"
    );
}
