//! # swim-core
//!
//! Declarative components that render to a [`swim_html::Node`] tree.
//!
//! - Components either are one of a closed set of built-ins or expose a
//!   `body` that expands into another component.
//! - The [`Environment`] carries configuration down the tree. A modifier
//!   overrides a key for its own subtree only.
//! - Preferences carry values up the tree. Writers attach values and
//!   readers merge them with the key's reducer.
//!
//! ## Example
//!
//! ```
//! use swim_core::{
//!     environment_key, environment_reader, preference_key, read_preference, reduce_or,
//!     render_to_string, sequence, AnyComponent, Component, ComponentExt,
//! };
//! use swim_html::tags::{div, p};
//!
//! environment_key! {
//!     static GREETING: String = "Hello".to_string();
//! }
//!
//! preference_key! {
//!     static USE_JAVASCRIPT: bool = false, reduce_or;
//! }
//!
//! struct Greeting;
//!
//! impl Component for Greeting {
//!     fn body(&self) -> AnyComponent {
//!         environment_reader(|env| div([env.get(&GREETING)]))
//!             .preference(&USE_JAVASCRIPT, true)
//!     }
//! }
//!
//! let tree = sequence![p([""]), Greeting];
//! assert!(read_preference(tree.clone(), &USE_JAVASCRIPT).unwrap());
//! assert_eq!(
//!     render_to_string(tree.environment(&GREETING, "Hi")),
//!     "<p>\n</p>\n<div>Hi</div>\n"
//! );
//! ```

mod macros;

pub mod builder;
pub mod component;
pub mod environment;
pub mod error;
pub mod key;
pub mod preference;
pub mod render;

pub use builder::{either, empty, optional, pair, sequence, when};
pub use component::{
    environment_reader, AnyComponent, Builtin, Component, ComponentExt, Either, IntoComponent,
};
pub use environment::{Environment, EnvironmentKey};
pub use error::{Result, SwimError};
pub use key::KeyId;
pub use preference::{
    read_preference, reduce_and, reduce_extend, reduce_keep_first, reduce_keep_last, reduce_max,
    reduce_min, reduce_or, PreferenceKey, Reducer,
};
pub use render::{render, render_in, render_to_string, render_to_string_with};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
