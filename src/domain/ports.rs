use super::markup;

/// Append-only tree builder the fragments compile into.
///
/// Fragments only ever add children and attributes; they never read a node back
/// or change one that was already added. Values are handed over already escaped
/// (see [`DocumentSink::escape`]), so implementations store them as given.
pub trait DocumentSink {
    /// Handle to a node previously returned by the sink.
    type Node: Copy;

    /// Appends an element named `name` under `parent`, with optional text content.
    fn add_child(&mut self, parent: Self::Node, name: &str, text: Option<&str>) -> Self::Node;

    /// Adds an attribute to `node`.
    fn add_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    /// Escapes a value bound for text content or an attribute value.
    fn escape(&self, value: &str) -> String {
        markup::escape(value)
    }
}
