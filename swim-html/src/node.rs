use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute mapping of an element, kept in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node of the markup tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Comment(String),
    Element {
        name: String,
        attributes: Attributes,
        children: Vec<Node>,
    },
    Text(String),
    /// Sibling nodes without a wrapping element.
    ///
    /// Fragments are transparent: adding one as a child splices its items
    /// into the parent's children, and serializing one writes its items at
    /// the current indentation.
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text<S: Into<String>>(s: S) -> Self {
        Node::Text(s.into())
    }

    pub fn comment<S: Into<String>>(s: S) -> Self {
        Node::Comment(s.into())
    }

    /// Create an element with no attributes and no children
    pub fn element<S: Into<String>>(name: S) -> Self {
        Node::Element {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Create a fragment, flattening nested fragments
    pub fn fragment<I>(nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let mut items = Vec::new();
        for node in nodes {
            push_flattened(&mut items, node.into());
        }
        Node::Fragment(items)
    }

    /// The empty fragment
    pub fn empty() -> Self {
        Node::Fragment(Vec::new())
    }

    /// Append this node to `out`, splicing fragment items in place
    pub fn flatten_into(self, out: &mut Vec<Node>) {
        push_flattened(out, self);
    }

    /// Set an attribute on an element.
    ///
    /// An existing attribute keeps its position and gets the new value.
    /// Non-element nodes are returned unchanged.
    pub fn with_attribute<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        if let Node::Element { attributes, .. } = &mut self {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_attributes<I, K, V>(self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        attributes
            .into_iter()
            .fold(self, |node, (key, value)| node.with_attribute(key, value))
    }

    /// Append a class to the space-separated `class` attribute
    pub fn with_class<S: Into<String>>(mut self, class: S) -> Self {
        if let Node::Element { attributes, .. } = &mut self {
            let class = class.into();
            attributes
                .entry("class".to_string())
                .and_modify(|existing| {
                    if existing.is_empty() {
                        existing.push_str(&class);
                    } else {
                        existing.push(' ');
                        existing.push_str(&class);
                    }
                })
                .or_insert_with(|| class.clone());
        }
        self
    }

    /// Set a `data-*` attribute
    pub fn with_data<K, V>(self, key: K, value: V) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        self.with_attribute(format!("data-{}", key.as_ref()), value)
    }

    pub fn with_child<N: Into<Node>>(mut self, child: N) -> Self {
        if let Node::Element { children, .. } = &mut self {
            push_flattened(children, child.into());
        }
        self
    }

    pub fn with_children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        if let Node::Element { children, .. } = &mut self {
            for node in nodes {
                push_flattened(children, node.into());
            }
        }
        self
    }

    /// Children of an element or items of a fragment
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Fragment(items) => items,
            Node::Comment(_) | Node::Text(_) => &[],
        }
    }

    /// Element name, if this is an element
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    /// Check if this is a fragment without items
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Fragment(items) if items.is_empty())
    }
}

fn push_flattened(into: &mut Vec<Node>, node: Node) {
    match node {
        Node::Fragment(items) => {
            for item in items {
                push_flattened(into, item);
            }
        }
        other => into.push(other),
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Node::fragment(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_flattens() {
        let nested = Node::fragment([
            Node::text("a"),
            Node::fragment([Node::text("b"), Node::fragment([Node::text("c")])]),
        ]);
        assert_eq!(
            nested,
            Node::Fragment(vec![Node::text("a"), Node::text("b"), Node::text("c")])
        );
    }

    #[test]
    fn test_flatten_into_appends_items() {
        let mut out = vec![Node::text("first")];
        Node::fragment([Node::text("a"), Node::text("b")]).flatten_into(&mut out);
        Node::comment("c").flatten_into(&mut out);
        Node::empty().flatten_into(&mut out);

        assert_eq!(
            out,
            vec![
                Node::text("first"),
                Node::text("a"),
                Node::text("b"),
                Node::comment("c"),
            ]
        );
    }

    #[test]
    fn test_element_splices_fragment_children() {
        let list = Node::element("ul")
            .with_child(Node::fragment([
                Node::element("li").with_child("one"),
                Node::element("li").with_child("two"),
            ]))
            .with_child(Node::empty());

        assert_eq!(list.children().len(), 2);
        assert_eq!(list.children()[1].children(), &[Node::text("two")]);
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let node = Node::element("a")
            .with_attribute("href", "/")
            .with_attribute("title", "home")
            .with_attribute("href", "/index");

        let keys: Vec<_> = match &node {
            Node::Element { attributes, .. } => attributes.keys().cloned().collect(),
            _ => unreachable!(),
        };
        assert_eq!(keys, vec!["href", "title"]);
        assert_eq!(node.attribute("href"), Some("/index"));
    }

    #[test]
    fn test_class_and_data() {
        let node = Node::element("article")
            .with_class("readme")
            .with_class("modern")
            .with_data("foo", "bar");

        assert_eq!(node.attribute("class"), Some("readme modern"));
        assert_eq!(node.attribute("data-foo"), Some("bar"));
    }

    #[test]
    fn test_builders_ignore_non_elements() {
        let text = Node::text("plain").with_attribute("id", "x").with_child("more");
        assert_eq!(text, Node::text("plain"));
        assert!(text.children().is_empty());
        assert_eq!(text.name(), None);
    }
}
