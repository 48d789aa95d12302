//! The renderer: reduces components to built-ins and renders them.

use crate::component::{AnyComponent, Builtin, IntoComponent};
use crate::environment::Environment;
use std::borrow::Cow;
use swim_html::{Node, SerializeOptions};
use tracing::trace;

impl AnyComponent {
    /// Expand custom bodies until a built-in is reached
    pub fn reduce(&self) -> Cow<'_, Builtin> {
        let mut body = match self {
            AnyComponent::Builtin(builtin) => return Cow::Borrowed(builtin),
            AnyComponent::Custom(custom) => custom.body(),
        };

        let mut depth = 1usize;
        loop {
            match body {
                AnyComponent::Builtin(builtin) => {
                    trace!(depth, kind = builtin.kind(), "expanded component body");
                    return Cow::Owned(builtin);
                }
                AnyComponent::Custom(custom) => {
                    depth += 1;
                    body = custom.body();
                }
            }
        }
    }

    /// Render under a fresh environment
    pub fn render(&self) -> Node {
        self.render_in(&Environment::default())
    }

    pub fn render_in(&self, environment: &Environment) -> Node {
        self.reduce().render(environment)
    }
}

impl Builtin {
    /// Render this built-in under `environment`.
    ///
    /// A render that yields a single node returns it as is; anything else
    /// is returned as one flat fragment.
    pub fn render(&self, environment: &Environment) -> Node {
        let mut out = Vec::new();
        self.render_into(environment, &mut out);
        match <[Node; 1]>::try_from(out) {
            Ok([node]) => node,
            Err(out) => Node::Fragment(out),
        }
    }

    /// Append the rendered nodes to `out`.
    ///
    /// The right child of a pair and the child of a wrapper are followed in
    /// a loop, so a long sequence renders without growing the stack.
    fn render_into(&self, environment: &Environment, out: &mut Vec<Node>) {
        let mut current = self.clone();
        let mut scoped = Cow::Borrowed(environment);

        loop {
            let next = match &current {
                Builtin::Leaf(node) => {
                    Node::clone(node).flatten_into(out);
                    return;
                }
                Builtin::Pair(left, right) => {
                    left.reduce().render_into(&scoped, out);
                    right.reduce().into_owned()
                }
                Builtin::PreferenceWriter(writer) => writer.child.reduce().into_owned(),
                Builtin::EnvironmentModifier(modifier) => {
                    trace!(key = modifier.key_name, "rendering subtree with modified environment");
                    scoped = Cow::Owned((modifier.transform)(&*scoped));
                    modifier.child.reduce().into_owned()
                }
                Builtin::EnvironmentReader(reader) => {
                    (reader.build)(&*scoped).reduce().into_owned()
                }
            };
            current = next;
        }
    }
}

/// Render `component` under a fresh environment
pub fn render<C: IntoComponent>(component: C) -> Node {
    component.into_component().render()
}

/// Render `component` under `environment`
pub fn render_in<C: IntoComponent>(component: C, environment: &Environment) -> Node {
    component.into_component().render_in(environment)
}

/// Render under a fresh environment and serialize with default options
pub fn render_to_string<C: IntoComponent>(component: C) -> String {
    render(component).to_string()
}

pub fn render_to_string_with<C: IntoComponent>(
    component: C,
    environment: &Environment,
    options: &SerializeOptions,
) -> String {
    render_in(component, environment).serialize_with(options)
}
