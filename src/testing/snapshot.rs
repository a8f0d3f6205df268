//! Snapshot rendering helpers.
//!
//! Functions for converting rendered elements into plain-text markup suitable
//! for snapshot testing and assertions.

use crate::props::{PropValue, Props};
use crate::render::{Component, Element, RenderError, Runtime, CHILDREN_PROP};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Serialise an element tree to markup.
///
/// The class attribute comes first, then the other attributes in order.
/// `true` renders as a bare attribute, `false` and null are skipped. Elements
/// without children are self-closing.
///
/// # Examples
///
/// ```ignore
/// use classbound::render::Element;
/// use classbound::testing::to_markup;
///
/// let el = Element::new("div").with_class("card").with_attr("id", "x");
/// assert_eq!(to_markup(&el), r#"<div class="card" id="x"/>"#);
/// ```
pub fn to_markup(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

/// Render `component` with `props` on a default runtime and serialise the result.
pub fn render_to_markup(component: &dyn Component, props: Props) -> Result<String, RenderError> {
    let element = Runtime::default().render_component(component, props)?;
    Ok(to_markup(&element))
}

// ---------------------------------------------------------------------------
// Serialisation
// ---------------------------------------------------------------------------

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag());

    if let Some(class) = element.class() {
        write_attr(out, "class", class);
    }

    for (name, value) in element.attrs().iter() {
        if name == CHILDREN_PROP {
            continue;
        }
        match value {
            PropValue::Null | PropValue::Bool(false) | PropValue::Children(_) => {}
            PropValue::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            PropValue::Int(n) => write_attr(out, name, &n.to_string()),
            PropValue::Float(f) => write_attr(out, name, &f.to_string()),
            PropValue::Str(s) => write_attr(out, name, s),
            PropValue::Class(c) => write_attr(out, name, &c.to_string()),
        }
    }

    let children = element.children();
    let text = element.attr(CHILDREN_PROP).and_then(PropValue::as_str);
    if children.is_empty() && text.is_none() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if let Some(text) = text {
        escape_into(out, text);
    }
    for child in children {
        write_element(child, out);
    }
    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value);
    out.push('"');
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
