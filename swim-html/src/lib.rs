//! # swim-html
//!
//! Immutable markup tree used as the render target of swim components.
//!
//! A [`Node`] is a comment, an element (name, ordered attributes, ordered
//! children), a text run, or a transparent fragment of siblings. Nodes
//! serialize to indented text through [`Display`](std::fmt::Display) or
//! [`Node::serialize_with`].
//!
//! ## Example
//!
//! ```
//! use swim_html::tags::{article, h1, header};
//!
//! let node = article([header([h1(["This is a great article."])])]).with_class("readme");
//! assert_eq!(
//!     node.to_string(),
//!     "<article class=\"readme\">\n  <header>\n    <h1>This is a great article.</h1>\n  </header>\n</article>\n"
//! );
//! ```

pub mod error;
pub mod node;
pub mod serialize;
pub mod tags;

pub use error::{MarkupError, Result};
pub use node::{Attributes, Node};
pub use serialize::SerializeOptions;
