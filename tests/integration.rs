//! Integration tests for classbound.
//!
//! These tests exercise the public API from outside the crate: creation,
//! rendering through the runtime, derivations, the element surface, and
//! querying rendered trees.

use classbound::elements;
use classbound::testing::{find_by_class, find_by_tag, render_to_markup, to_markup};
use classbound::{
    create, create_named, create_with_variants, intrinsic, resolve_variants, split_props,
    BoundComponent, ClassValue, Component, Element, ElementType, Options, PartialOptions,
    PropValue, Props, RenderError, Runtime, RuntimeConfig, SplitProps, VariantMap,
};
use pretty_assertions::assert_eq;

fn card() -> BoundComponent {
    create(
        Options::new()
            .with_class_name("card")
            .with_variants(VariantMap::from([("active", "card--active")])),
    )
}

fn render(component: &BoundComponent, props: Props) -> Element {
    component.render(props, &Runtime::default()).unwrap()
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[test]
fn test_card_active_with_id() {
    let el = render(&card(), Props::new().with("active", true).with("id", "x"));
    assert_eq!(el.class(), Some("card card--active"));
    assert_eq!(el.attr("id"), Some(&PropValue::from("x")));
    assert!(el.attr("active").is_none());
}

#[test]
fn test_card_inactive() {
    let el = render(&card(), Props::new().with("active", false));
    assert_eq!(el.class(), Some("card"));
}

#[test]
fn test_card_markup_snapshot() {
    let markup = render_to_markup(&card(), Props::new().with("active", true).with("id", "x")).unwrap();
    insta::assert_snapshot!(markup, @r#"<div class="card card--active" id="x"/>"#);
}

// ---------------------------------------------------------------------------
// Variant activation and splitting
// ---------------------------------------------------------------------------

#[test]
fn test_variant_activation_follows_flags_and_map_order() {
    let variants = VariantMap::from([("a", "va"), ("b", "vb"), ("c", "vc"), ("d", "vd")]);
    let flags: [(&str, PropValue); 4] = [
        ("d", true.into()),
        ("b", "".into()),
        ("a", 1.into()),
        ("c", PropValue::Null),
    ];
    let props: Props = flags.into_iter().collect();
    let resolved = resolve_variants(&variants, &props);
    assert_eq!(resolved, vec![ClassValue::from("va"), ClassValue::from("vd")]);
}

#[test]
fn test_split_is_pass_through() {
    let variants = VariantMap::from([("active", "x"), ("absent", "y")]);
    let props = Props::new()
        .with("onclick", "go()")
        .with("active", false)
        .with("children", vec![Element::new("span")]);
    let split = split_props(props.clone(), &variants);
    let expected: Props = props.into_iter().filter(|(k, _)| k != "active").collect();
    assert_eq!(split.component_props, expected);
    assert_eq!(split.variant_props, Props::new().with("active", false));
    assert_eq!(split_props(Props::new(), &variants), SplitProps::default());
}

// ---------------------------------------------------------------------------
// Empty class omission
// ---------------------------------------------------------------------------

#[test]
fn test_no_class_attribute_when_everything_is_falsy() {
    let plain = create_named(ClassValue::None, None, Some(VariantMap::from([("on", "x")])), None);
    let el = render(&plain, Props::new().with("on", false).with("class", PropValue::Null));
    assert_eq!(el.class(), None);
    assert_eq!(to_markup(&el), "<div/>");
}

#[test]
fn test_falsy_nested_class_values_are_omitted() {
    let plain = create(Options::new().with_class_name(ClassValue::from(vec![
        ClassValue::None,
        ClassValue::from(""),
        ClassValue::map([("hidden", false)]),
    ])));
    assert_eq!(plain.class_for(Props::new()), None);
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

#[test]
fn test_extend_combines_while_with_variants_replaces() {
    let base = create_with_variants("c", VariantMap::from([("a", "x")]), None);
    let active = Props::new().with("a", true);

    let extended = base.extend("", VariantMap::from([("a", "y")]));
    let class = extended.class_for(active.clone()).unwrap();
    assert!(class.split(' ').any(|c| c == "x"));
    assert!(class.split(' ').any(|c| c == "y"));

    let replaced = base.with_variants(VariantMap::from([("a", "y")]), None);
    let class = replaced.class_for(active).unwrap();
    assert!(!class.split(' ').any(|c| c == "x"));
    assert!(class.split(' ').any(|c| c == "y"));
}

#[test]
fn test_with_options_does_not_inherit() {
    let rich = create_named(
        "rich",
        Some("Rich"),
        Some(VariantMap::from([("on", "rich--on")])),
        Some("section".into()),
    );
    let reset = rich.with_options(|_| PartialOptions::new());
    assert_eq!(reset.class_for(Props::new().with("on", true)), None);
    assert!(reset.options().variants().is_none());
    assert_eq!(reset.element_type(), ElementType::from("div"));
}

#[test]
fn test_derivations_do_not_change_original() {
    let original = create_named(
        ["btn", "btn-sm"],
        Some("Btn"),
        Some(VariantMap::from([("primary", "btn-primary"), ("ghost", "btn-ghost")])),
        Some("button".into()),
    );
    let props = Props::new()
        .with("primary", true)
        .with("ghost", true)
        .with("class", "ml-1")
        .with("type", "submit");
    let before = to_markup(&render(&original, props.clone()));

    let derived = [
        original.extend("x", VariantMap::from([("primary", "y")])),
        original.extend_named("x", Some("Other"), None),
        original.with_variants(VariantMap::from([("ghost", "z")]), Some("Z")),
        original.as_element("a", Some("Link")),
        original.with_options(|prev| prev.to_partial().with_class_name("other")),
        original.with_options(|_| PartialOptions::new()),
    ];
    for component in &derived {
        let _ = render(component, props.clone());
    }

    assert_eq!(to_markup(&render(&original, props)), before);
    insta::assert_snapshot!(before, @r#"<button class="btn btn-sm btn-primary btn-ghost ml-1" type="submit"/>"#);
}

#[test]
fn test_chained_derivations() {
    let button = elements::button().create_with_variants("btn", VariantMap::from([("primary", "btn-primary")]));
    let danger = button
        .extend_named("btn-danger", Some("DangerButton"), Some(VariantMap::from([("primary", "btn-danger-primary")])))
        .as_element("a", None)
        .with_variants(VariantMap::from([("block", "w-full")]), None);

    assert_eq!(danger.display_name(), Some("DangerButton"));
    let el = render(
        &danger,
        Props::new().with("primary", true).with("block", true).with("href", "#"),
    );
    insta::assert_snapshot!(
        to_markup(&el),
        @r##"<a class="btn btn-danger btn-primary btn-danger-primary w-full" href="#"/>"##
    );
}

// ---------------------------------------------------------------------------
// Element surface
// ---------------------------------------------------------------------------

#[test]
fn test_intrinsic_surface() {
    let nav = intrinsic("nav").unwrap().create("navbar");
    let el = render(&nav, Props::new());
    assert_eq!(el.tag(), "nav");
    assert_eq!(el.class(), Some("navbar"));
    assert!(intrinsic("not-a-tag").is_none());
}

#[test]
fn test_fallback_for_unknown_tags() {
    let custom = create("widget").as_element("x-widget", None);
    let el = render(&custom, Props::new());
    assert_eq!(el.tag(), "x-widget");
}

// ---------------------------------------------------------------------------
// Runtime
// ---------------------------------------------------------------------------

#[test]
fn test_strict_runtime_surfaces_unknown_elements() {
    let runtime = Runtime::new(RuntimeConfig::new().with_strict_elements(true));
    let custom = create("widget").as_element("x-widget", None);
    assert_eq!(
        custom.render(Props::new(), &runtime).unwrap_err(),
        RenderError::UnknownElement { tag: "x-widget".into() }
    );
    assert!(card().render(Props::new(), &runtime).is_ok());
}

#[test]
fn test_wrapping_a_custom_component() {
    let icon_button = |props: Props, rt: &Runtime| -> Result<Element, RenderError> {
        let label = props.get("label").and_then(PropValue::as_str).unwrap_or("").to_owned();
        let mut forwarded = props;
        forwarded.remove("label");
        let el = rt.render(&"button".into(), forwarded)?;
        Ok(el.with_child(Element::new("span").with_class("icon").with_attr("children", label)))
    };
    let styled = create(
        Options::new()
            .with_class_name("icon-btn")
            .with_element_type(ElementType::component(icon_button))
            .with_variants(VariantMap::from([("round", "rounded-full")])),
    );
    let el = render(&styled, Props::new().with("round", true).with("label", "+"));
    insta::assert_snapshot!(
        to_markup(&el),
        @r#"<button class="icon-btn rounded-full"><span class="icon">+</span></button>"#
    );
}

#[test]
fn test_components_are_shareable_across_threads() {
    let component = card();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let component = component.clone();
            std::thread::spawn(move || {
                component
                    .class_for(Props::new().with("active", i % 2 == 0))
                    .unwrap_or_default()
            })
        })
        .collect();
    let classes: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(classes, vec!["card card--active", "card", "card card--active", "card"]);
}

// ---------------------------------------------------------------------------
// Rendered trees
// ---------------------------------------------------------------------------

#[test]
fn test_rendered_tree_queries_by_class() {
    let item = elements::li().create_with_variants("item", VariantMap::from([("done", "item--done")]));
    let list = elements::ul().create("list");
    let runtime = Runtime::default();

    let children: Vec<Element> = [false, true, true]
        .into_iter()
        .map(|done| item.render(Props::new().with("done", done), &runtime).unwrap())
        .collect();
    let el = list.render(Props::new().with("children", children), &runtime).unwrap();

    assert_eq!(el.children().len(), 3);
    assert_eq!(find_by_class(&el, "item").len(), 3);
    assert_eq!(find_by_class(&el, "item--done").len(), 2);
    assert_eq!(find_by_tag(&el, "ul").len(), 1);
    assert!(find_by_tag(&el, "ul")[0].has_class("list"));
}
