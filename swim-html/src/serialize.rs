//! Indented text serialization of the markup tree.

use crate::error::Result;
use crate::node::{Attributes, Node};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Options controlling markup serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Spaces added per nesting level
    pub indent_width: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl SerializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Parse options from a YAML document; missing fields keep their defaults
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }
}

impl Node {
    /// Serialize this node to indented text
    pub fn serialize_with(&self, options: &SerializeOptions) -> String {
        let mut buffer = String::new();
        self.write_into(&mut buffer, 0, options);
        buffer
    }

    fn write_into(&self, buffer: &mut String, level: usize, options: &SerializeOptions) {
        match self {
            Node::Comment(value) => {
                pad(buffer, level, options, &format!("<!-- {} -->", value));
            }
            Node::Element {
                name,
                attributes,
                children,
            } => {
                let attrs = serialize_attributes(attributes);

                if children.is_empty() {
                    if attrs.is_empty() {
                        pad(buffer, level, options, &format!("<{}/>", name));
                    } else {
                        pad(buffer, level, options, &format!("<{} {} />", name, attrs));
                    }
                    return;
                }

                let open = if attrs.is_empty() {
                    format!("<{}>", name)
                } else {
                    format!("<{} {}>", name, attrs)
                };

                if let [Node::Text(text)] = children.as_slice() {
                    if !text.is_empty() && !text.contains('\n') {
                        pad(buffer, level, options, &format!("{}{}</{}>", open, text, name));
                        return;
                    }
                }

                pad(buffer, level, options, &open);
                for child in children {
                    child.write_into(buffer, level + 1, options);
                }
                pad(buffer, level, options, &format!("</{}>", name));
            }
            Node::Text(value) => {
                if !value.is_empty() {
                    pad(buffer, level, options, value);
                }
            }
            Node::Fragment(items) => {
                for item in items {
                    item.write_into(buffer, level, options);
                }
            }
        }
    }
}

fn pad(buffer: &mut String, level: usize, options: &SerializeOptions, line: &str) {
    buffer.extend(std::iter::repeat(' ').take(level * options.indent_width));
    buffer.push_str(line);
    buffer.push('\n');
}

fn serialize_attributes(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize_with(&SerializeOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_element_self_closes() {
        assert_eq!(Node::element("br").to_string(), "<br/>\n");
        assert_eq!(
            Node::element("meta")
                .with_attribute("charset", "utf-8")
                .to_string(),
            "<meta charset=\"utf-8\" />\n"
        );
    }

    #[test]
    fn test_single_text_child_is_inline() {
        let node = Node::element("div").with_child("Hi");
        assert_eq!(node.to_string(), "<div>Hi</div>\n");
    }

    #[test]
    fn test_empty_text_child_keeps_block_form() {
        let node = Node::element("p").with_child("");
        assert_eq!(node.to_string(), "<p>\n</p>\n");
    }

    #[test]
    fn test_nested_children_indent() {
        let node = Node::element("p")
            .with_child("This is a")
            .with_child(
                Node::element("a")
                    .with_attribute("href", "https://swift.org")
                    .with_child("link"),
            )
            .with_child(Node::comment("note"));

        assert_eq!(
            node.to_string(),
            "<p>\n  This is a\n  <a href=\"https://swift.org\">link</a>\n  <!-- note -->\n</p>\n"
        );
    }

    #[test]
    fn test_fragment_serializes_items_in_sequence() {
        let node = Node::fragment([Node::element("hr"), Node::text("after")]);
        assert_eq!(node.to_string(), "<hr/>\nafter\n");
        assert_eq!(Node::empty().to_string(), "");
    }

    #[test]
    fn test_custom_indent_width() {
        let node = Node::element("ul").with_child(Node::element("li").with_child(Node::element("br")));
        let options = SerializeOptions::new().with_indent_width(4);
        assert_eq!(
            node.serialize_with(&options),
            "<ul>\n    <li>\n        <br/>\n    </li>\n</ul>\n"
        );
    }

    #[test]
    fn test_options_from_yaml() {
        let options = SerializeOptions::from_yaml("indent_width: 3").unwrap();
        assert_eq!(options.indent_width, 3);

        let defaults = SerializeOptions::from_yaml("{}").unwrap();
        assert_eq!(defaults, SerializeOptions::default());

        assert!(SerializeOptions::from_yaml("indent_width: [1, 2]").is_err());
    }
}
