//! One constructor per HTML element name.
//!
//! Container elements take any iterator of children convertible into
//! [`Node`]; void elements take none. Attributes are added afterwards with
//! the builder methods on [`Node`]:
//!
//! ```
//! use swim_html::tags::*;
//! use swim_html::Node;
//!
//! let page = html([
//!     head([meta().with_attribute("charset", "utf-8")]),
//!     body([p([Node::text("Hello "), a(["link"]).with_attribute("href", "/")])]),
//! ])
//! .with_attribute("lang", "en-US");
//! assert_eq!(page.name(), Some("html"));
//! ```

use crate::node::Node;

macro_rules! container_tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Creates a `<", stringify!($name), ">` element holding `children`.")]
            pub fn $name<I>(children: I) -> Node
            where
                I: IntoIterator,
                I::Item: Into<Node>,
            {
                Node::element(stringify!($name)).with_children(children)
            }
        )*

        /// Names of all container elements with a constructor here
        pub const CONTAINER_TAGS: &[&str] = &[$(stringify!($name)),*];
    };
}

macro_rules! void_tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Creates an empty `<", stringify!($name), ">` element.")]
            pub fn $name() -> Node {
                Node::element(stringify!($name))
            }
        )*

        /// Names of all void elements with a constructor here
        pub const VOID_TAGS: &[&str] = &[$(stringify!($name)),*];
    };
}

container_tags! {
    a, abbr, address, article, aside, audio, b, bdi, bdo, blockquote, body,
    button, canvas, caption, cite, code, colgroup, datalist, dd, del, details,
    dfn, dialog, div, dl, dt, em, fieldset, figcaption, figure, footer, form,
    h1, h2, h3, h4, h5, h6, head, header, hgroup, html, i, iframe, ins, kbd,
    label, legend, li, main, map, mark, menu, meter, nav, noscript, object, ol,
    optgroup, option, output, p, picture, pre, progress, q, rp, rt, ruby, s,
    samp, script, search, section, select, slot, small, span, strong, style,
    sub, summary, sup, table, tbody, td, template, textarea, tfoot, th, thead,
    time, title, tr, u, ul, var, video,
}

void_tags! {
    area, base, br, col, embed, hr, img, input, link, meta, source, track, wbr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_tag() {
        let node = div(["Hello"]).with_class("greeting");
        assert_eq!(node.to_string(), "<div class=\"greeting\">Hello</div>\n");
    }

    #[test]
    fn test_void_tag() {
        assert_eq!(br().to_string(), "<br/>\n");
        assert!(VOID_TAGS.contains(&"img"));
    }

    #[test]
    fn test_tag_names_are_unique() {
        let mut names: Vec<_> = CONTAINER_TAGS.iter().chain(VOID_TAGS).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
