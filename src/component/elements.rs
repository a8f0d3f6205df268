//! Intrinsic element table and per-tag creation accessors.
//!
//! Each known tag gets an accessor function returning an [`ElementFactory`]
//! bound to it, e.g. `elements::button().create("btn")`. For tags only known
//! at runtime, [`intrinsic`] looks up a factory built once on first use; unknown
//! tags return `None` and callers fall back to [`create`](super::create::create)
//! plus [`BoundComponent::as_element`](super::BoundComponent::as_element).

use std::collections::HashMap;
use std::sync::LazyLock;

use super::create::ElementFactory;

macro_rules! intrinsic_elements {
    ($($name:ident => $tag:literal),* $(,)?) => {
        /// Every known intrinsic element tag.
        pub const INTRINSIC_ELEMENTS: &[&str] = &[$($tag),*];

        $(
            #[doc = concat!("Creation surface bound to `<", $tag, ">`.")]
            pub fn $name() -> ElementFactory {
                ElementFactory::new($tag)
            }
        )*
    };
}

intrinsic_elements! {
    // HTML
    a => "a", abbr => "abbr", address => "address", area => "area", article => "article",
    aside => "aside", audio => "audio", b => "b", base => "base", bdi => "bdi", bdo => "bdo",
    big => "big", blockquote => "blockquote", body => "body", br => "br", button => "button",
    canvas => "canvas", caption => "caption", center => "center", cite => "cite", code => "code",
    col => "col", colgroup => "colgroup", data => "data", datalist => "datalist", dd => "dd",
    del => "del", details => "details", dfn => "dfn", dialog => "dialog", div => "div",
    dl => "dl", dt => "dt", em => "em", embed => "embed", fieldset => "fieldset",
    figcaption => "figcaption", figure => "figure", footer => "footer", form => "form",
    h1 => "h1", h2 => "h2", h3 => "h3", h4 => "h4", h5 => "h5", h6 => "h6", head => "head",
    header => "header", hgroup => "hgroup", hr => "hr", html => "html", i => "i",
    iframe => "iframe", img => "img", input => "input", ins => "ins", kbd => "kbd",
    keygen => "keygen", label => "label", legend => "legend", li => "li", link => "link",
    main => "main", map => "map", mark => "mark", menu => "menu", menuitem => "menuitem",
    meta => "meta", meter => "meter", nav => "nav", noindex => "noindex", noscript => "noscript",
    object => "object", ol => "ol", optgroup => "optgroup", option => "option", output => "output",
    p => "p", param => "param", picture => "picture", pre => "pre", progress => "progress",
    q => "q", rp => "rp", rt => "rt", ruby => "ruby", s => "s", samp => "samp",
    search => "search", slot => "slot", script => "script", section => "section",
    select => "select", small => "small", source => "source", span => "span", strong => "strong",
    style => "style", sub => "sub", summary => "summary", sup => "sup", table => "table",
    template => "template", tbody => "tbody", td => "td", textarea => "textarea",
    tfoot => "tfoot", th => "th", thead => "thead", time => "time", title => "title",
    tr => "tr", track => "track", u => "u", ul => "ul", var => "var", video => "video",
    wbr => "wbr", webview => "webview",
    // SVG
    svg => "svg", animate => "animate", circle => "circle", clip_path => "clipPath",
    defs => "defs", desc => "desc", ellipse => "ellipse", filter => "filter",
    foreign_object => "foreignObject", g => "g", image => "image", line => "line",
    linear_gradient => "linearGradient", marker => "marker", mask => "mask",
    metadata => "metadata", path => "path", pattern => "pattern", polygon => "polygon",
    polyline => "polyline", radial_gradient => "radialGradient", rect => "rect", stop => "stop",
    switch => "switch", symbol => "symbol", text => "text", text_path => "textPath",
    tspan => "tspan", r#use => "use", view => "view",
}

static INTRINSIC_FACTORIES: LazyLock<HashMap<&'static str, ElementFactory>> = LazyLock::new(|| {
    INTRINSIC_ELEMENTS
        .iter()
        .map(|&tag| (tag, ElementFactory::new(tag)))
        .collect()
});

/// The pre-built factory for a known intrinsic tag.
pub fn intrinsic(tag: &str) -> Option<&'static ElementFactory> {
    INTRINSIC_FACTORIES.get(tag)
}

/// Whether `tag` is a known intrinsic element.
pub fn is_intrinsic(tag: &str) -> bool {
    INTRINSIC_FACTORIES.contains_key(tag)
}
