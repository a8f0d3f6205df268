//! Render errors raised by the host runtime.

/// Errors surfaced while turning an element type and props into an element.
///
/// Bound components never raise these themselves; they pass them through from
/// the runtime or from the component they wrap.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("unknown element type: <{tag}>")]
    UnknownElement { tag: String },
    #[error("component {name} failed to render: {message}")]
    Component { name: String, message: String },
}
