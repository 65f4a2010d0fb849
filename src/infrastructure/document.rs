use crate::domain::ports::DocumentSink;

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub text: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<NodeId>,
}

impl Element {
    fn new(name: &str, text: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            text: text.map(str::to_string),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// An append-only element tree backed by an arena.
///
/// Text and attribute values are kept exactly as received; the fragments escape
/// them before handing them over, so serialization writes them verbatim.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Creates a document holding a single, empty root element.
    pub fn new(root_name: &str) -> Self {
        Self {
            elements: vec![Element::new(root_name, None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Looks up `node`, or `None` if it does not belong to this document.
    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    /// Returns the element behind `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` was issued by a different document and is out of range
    /// here. Use [`Document::get`] when the handle's origin is not known.
    pub fn element(&self, node: NodeId) -> &Element {
        &self.elements[node.0]
    }

    /// Child elements of `node`, in insertion order.
    ///
    /// Panics like [`Document::element`] on a foreign handle.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = &Element> {
        self.elements[node.0]
            .children
            .iter()
            .map(|child| &self.elements[child.0])
    }

    /// Finds the first direct child of `node` named `name`. Panics like
    /// [`Document::element`] on a foreign handle.
    pub fn child(&self, node: NodeId, name: &str) -> Option<NodeId> {
        self.elements[node.0]
            .children
            .iter()
            .copied()
            .find(|child| self.elements[child.0].name == name)
    }

    pub fn to_xml(&self) -> String {
        self.render(self.root())
    }

    /// Serializes the subtree rooted at `node`.
    pub fn render(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_element(node, &mut out);
        out
    }

    fn write_element(&self, node: NodeId, out: &mut String) {
        let element = &self.elements[node.0];
        out.push('<');
        out.push_str(&element.name);
        for (name, value) in &element.attributes {
            out.push_str(&format!(" {name}=\"{value}\""));
        }
        if element.text.is_none() && element.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(text) = &element.text {
            out.push_str(text);
        }
        for child in &element.children {
            self.write_element(*child, out);
        }
        out.push_str("</");
        out.push_str(&element.name);
        out.push('>');
    }
}

impl DocumentSink for Document {
    type Node = NodeId;

    fn add_child(&mut self, parent: NodeId, name: &str, text: Option<&str>) -> NodeId {
        let id = NodeId(self.elements.len());
        self.elements.push(Element::new(name, text));
        self.elements[parent.0].children.push(id);
        id
    }

    fn add_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.elements[node.0]
            .attributes
            .push((name.to_string(), value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_root_renders_self_closing() {
        let doc = Document::new("billing");
        assert_eq!(doc.to_xml(), "<billing/>");
    }

    #[test]
    fn test_children_and_attributes_in_insertion_order() {
        let mut doc = Document::new("billing");
        let root = doc.root();
        let amount = doc.add_child(root, "amount", Some("1000"));
        doc.add_attribute(amount, "currencycode", "GBP");
        let name = doc.add_child(root, "name", None);
        doc.add_child(name, "first", Some("Ann"));

        assert_eq!(
            doc.to_xml(),
            "<billing><amount currencycode=\"GBP\">1000</amount><name><first>Ann</first></name></billing>"
        );
        assert_eq!(doc.element(amount).attribute("currencycode"), Some("GBP"));
        assert_eq!(doc.child(root, "name"), Some(name));
        assert_eq!(doc.children(root).count(), 2);
    }

    #[test]
    fn test_get_rejects_foreign_handle() {
        let mut other = Document::new("other");
        let other_root = other.root();
        let foreign = other.add_child(other_root, "a", None);
        let foreign = other.add_child(foreign, "b", None);

        let doc = Document::new("billing");
        assert!(doc.get(foreign).is_none());
        assert_eq!(doc.get(doc.root()).map(|e| e.name.as_str()), Some("billing"));
    }

    #[test]
    fn test_values_written_verbatim() {
        let mut doc = Document::new("r");
        let root = doc.root();
        doc.add_child(root, "town", Some("A &amp; B"));
        assert_eq!(doc.to_xml(), "<r><town>A &amp; B</town></r>");
    }
}
