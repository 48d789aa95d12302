//! Markup tree construction and serialization tests

use proptest::prelude::*;
use swim_html::tags::*;
use swim_html::{Node, SerializeOptions};

fn sample_page() -> Node {
    html([
        head([meta()
            .with_attribute("charset", "utf-8")
            .with_attribute("content", "text/html")
            .with_attribute("http-equiv", "Content-Type")]),
        body([article([
            header([h1(["This is a great article."])]),
            p(["Hello World!"]),
            p([
                Node::text("This is a"),
                a(["link to the Swift website"]).with_attribute("href", "https://swift.org"),
                Node::text("."),
            ]),
        ])
        .with_class("readme")
        .with_class("modern")])
        .with_data("foo", "bar"),
    ])
    .with_attribute("lang", "en-US")
}

#[test]
fn test_full_page_serialization() {
    let expected = "\
<html lang=\"en-US\">
  <head>
    <meta charset=\"utf-8\" content=\"text/html\" http-equiv=\"Content-Type\" />
  </head>
  <body data-foo=\"bar\">
    <article class=\"readme modern\">
      <header>
        <h1>This is a great article.</h1>
      </header>
      <p>Hello World!</p>
      <p>
        This is a
        <a href=\"https://swift.org\">link to the Swift website</a>
        .
      </p>
    </article>
  </body>
</html>
";
    assert_eq!(sample_page().to_string(), expected);
}

#[test]
fn test_display_matches_default_options() {
    let page = sample_page();
    assert_eq!(page.to_string(), page.serialize_with(&SerializeOptions::default()));
}

#[test]
fn test_zero_indent() {
    let node = ul([li(["one"]), li(["two"])]);
    let options = SerializeOptions::from_yaml("indent_width: 0").unwrap();
    assert_eq!(
        node.serialize_with(&options),
        "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n"
    );
}

#[test]
fn test_serde_shape() {
    let node = div(["Hi"]).with_attribute("id", "greeting");
    let json = serde_json::to_value(&node).unwrap();

    assert_eq!(json["Element"]["name"], "div");
    assert_eq!(json["Element"]["attributes"]["id"], "greeting");
    assert_eq!(json["Element"]["children"][0]["Text"], "Hi");

    let back: Node = serde_json::from_value(json).unwrap();
    assert_eq!(back, node);
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        "[a-z ]{0,8}".prop_map(Node::text),
        "[a-z]{1,6}".prop_map(Node::comment),
        "[a-z]{1,4}".prop_map(Node::element),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            "[a-z]{1,4}",
            prop::collection::vec(("[a-z]{1,3}", "[a-z]{0,3}"), 0..3),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, attributes, children)| {
                Node::element(name)
                    .with_attributes(attributes)
                    .with_children(children)
            })
    })
}

proptest! {
    #[test]
    fn serialization_is_idempotent(node in arb_node()) {
        let first = node.to_string();
        let second = node.to_string();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fragment_serializes_as_concatenation(left in arb_node(), right in arb_node()) {
        let joined = Node::fragment([left.clone(), right.clone()]).to_string();
        prop_assert_eq!(joined, format!("{}{}", left, right));
    }
}
