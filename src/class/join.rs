//! Class-string construction: flatten class values into one space-joined string.

use super::value::ClassValue;

/// Flatten class values into a single space-separated class string.
///
/// Strings are taken as-is when non-empty, lists are flattened recursively, and
/// map entries contribute their name when flagged. Falsy entries are dropped.
/// No de-duplication is performed.
pub fn class_names<'a>(values: impl IntoIterator<Item = &'a ClassValue>) -> String {
    let mut parts = Vec::new();
    for value in values {
        collect_parts(value, &mut parts);
    }
    parts.join(" ")
}

fn collect_parts<'a>(value: &'a ClassValue, parts: &mut Vec<&'a str>) {
    match value {
        ClassValue::None => {}
        ClassValue::Str(s) => {
            if !s.is_empty() {
                parts.push(s);
            }
        }
        ClassValue::List(items) => {
            for item in items {
                collect_parts(item, parts);
            }
        }
        ClassValue::Map(entries) => {
            for (name, active) in entries {
                if *active && !name.is_empty() {
                    parts.push(name);
                }
            }
        }
    }
}
