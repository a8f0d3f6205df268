//! Queries over rendered element trees.
//!
//! Every query walks the tree in document order (pre-order, depth first),
//! starting with the given element itself.

use crate::props::PropValue;
use crate::render::Element;

/// All elements of the tree rooted at `root`, in document order.
pub fn walk(root: &Element) -> Vec<&Element> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(element) = stack.pop() {
        out.push(element);
        stack.extend(element.children().iter().rev());
    }
    out
}

/// Elements matching `predicate`, in document order.
pub fn find_all<'a>(root: &'a Element, predicate: impl Fn(&Element) -> bool) -> Vec<&'a Element> {
    walk(root).into_iter().filter(|el| predicate(*el)).collect()
}

/// Elements whose class attribute contains the class name `class`.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    find_all(root, |el| el.has_class(class))
}

/// Elements with the given tag.
pub fn find_by_tag<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    find_all(root, |el| el.tag() == tag)
}

/// The first element whose `id` attribute is `id`.
pub fn find_by_id<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    walk(root)
        .into_iter()
        .find(|el| el.attr("id").and_then(PropValue::as_str) == Some(id))
}
