//! Component abstraction and type erasure.
//!
//! Every composable unit is either one of a closed set of [`Builtin`]
//! kinds or a user type implementing [`Component`], whose `body` expands
//! into another component. [`AnyComponent`] erases both into one value that
//! the renderer and the preference reader walk.

use crate::environment::{Environment, EnvironmentKey};
use crate::key::KeyId;
use crate::preference::PreferenceKey;
use once_cell::sync::Lazy;
use std::any::Any;
use std::fmt;
use std::mem;
use std::sync::Arc;
use swim_html::Node;

/// A user-defined component.
///
/// The body must eventually reduce to a built-in. A body that expands to
/// itself, directly or through other components, never terminates.
///
/// ```
/// use swim_core::{render, AnyComponent, Component, IntoComponent};
/// use swim_html::tags::h1;
///
/// struct Title(&'static str);
///
/// impl Component for Title {
///     fn body(&self) -> AnyComponent {
///         h1([self.0]).into_component()
///     }
/// }
///
/// assert_eq!(render(Title("Swim")).to_string(), "<h1>Swim</h1>\n");
/// ```
pub trait Component: Send + Sync + 'static {
    fn body(&self) -> AnyComponent;
}

/// A type-erased component
#[derive(Clone)]
pub enum AnyComponent {
    Builtin(Builtin),
    Custom(Arc<dyn Component>),
}

/// The primitive component kinds the engine renders directly
#[derive(Clone)]
pub enum Builtin {
    /// A finished markup node
    Leaf(Arc<Node>),
    /// Two components rendered in sequence
    Pair(Arc<AnyComponent>, Arc<AnyComponent>),
    PreferenceWriter(PreferenceWriter),
    EnvironmentModifier(EnvironmentModifier),
    EnvironmentReader(EnvironmentReader),
}

/// Attaches one preference value to a subtree
#[derive(Clone)]
pub struct PreferenceWriter {
    pub(crate) key: KeyId,
    pub(crate) key_name: &'static str,
    pub(crate) value: Arc<dyn Any + Send + Sync>,
    pub(crate) child: Arc<AnyComponent>,
}

type EnvironmentTransform = dyn Fn(&Environment) -> Environment + Send + Sync;

/// Renders its child under a derived environment
#[derive(Clone)]
pub struct EnvironmentModifier {
    pub(crate) key_name: &'static str,
    pub(crate) transform: Arc<EnvironmentTransform>,
    pub(crate) child: Arc<AnyComponent>,
}

type EnvironmentBuild = dyn Fn(&Environment) -> AnyComponent + Send + Sync;

/// Builds its content from the environment at render time
#[derive(Clone)]
pub struct EnvironmentReader {
    pub(crate) build: Arc<EnvironmentBuild>,
}

impl AnyComponent {
    /// Name of the erased kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            AnyComponent::Builtin(builtin) => builtin.kind(),
            AnyComponent::Custom(_) => "custom",
        }
    }
}

impl Builtin {
    pub fn kind(&self) -> &'static str {
        match self {
            Builtin::Leaf(_) => "leaf",
            Builtin::Pair(..) => "pair",
            Builtin::PreferenceWriter(_) => "preference writer",
            Builtin::EnvironmentModifier(_) => "environment modifier",
            Builtin::EnvironmentReader(_) => "environment reader",
        }
    }
}

/// Stands in for children detached while a built-in is dropped
static VACANT: Lazy<Arc<AnyComponent>> =
    Lazy::new(|| Arc::new(AnyComponent::Builtin(Builtin::Leaf(Arc::new(Node::empty())))));

impl Builtin {
    /// Move the child handles of this built-in onto `pending`
    fn detach_children(&mut self, pending: &mut Vec<Arc<AnyComponent>>) {
        let mut detach = |child: &mut Arc<AnyComponent>| {
            pending.push(mem::replace(child, Arc::clone(&*VACANT)));
        };
        match self {
            Builtin::Pair(left, right) => {
                detach(left);
                detach(right);
            }
            Builtin::PreferenceWriter(writer) => detach(&mut writer.child),
            Builtin::EnvironmentModifier(modifier) => detach(&mut modifier.child),
            Builtin::Leaf(_) | Builtin::EnvironmentReader(_) => {}
        }
    }
}

// A sequence is a chain of pairs as long as its item count; dropping it
// through the default glue would recurse once per link.
impl Drop for Builtin {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        while let Some(child) = pending.pop() {
            if let Ok(mut child) = Arc::try_unwrap(child) {
                if let AnyComponent::Builtin(builtin) = &mut child {
                    builtin.detach_children(&mut pending);
                }
            }
        }
    }
}

impl fmt::Debug for AnyComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyComponent::Builtin(builtin) => builtin.fmt(f),
            AnyComponent::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Builtin::Leaf(node) => f.debug_tuple("Leaf").field(node).finish(),
            Builtin::Pair(left, right) => f.debug_tuple("Pair").field(left).field(right).finish(),
            Builtin::PreferenceWriter(writer) => f
                .debug_struct("PreferenceWriter")
                .field("key", &writer.key_name)
                .field("child", &writer.child)
                .finish(),
            Builtin::EnvironmentModifier(modifier) => f
                .debug_struct("EnvironmentModifier")
                .field("key", &modifier.key_name)
                .field("child", &modifier.child)
                .finish(),
            Builtin::EnvironmentReader(_) => f.write_str("EnvironmentReader(..)"),
        }
    }
}

/// Conversion into an erased component
pub trait IntoComponent {
    fn into_component(self) -> AnyComponent;
}

impl IntoComponent for AnyComponent {
    fn into_component(self) -> AnyComponent {
        self
    }
}

impl<C: Component> IntoComponent for C {
    fn into_component(self) -> AnyComponent {
        AnyComponent::Custom(Arc::new(self))
    }
}

impl IntoComponent for Node {
    fn into_component(self) -> AnyComponent {
        AnyComponent::Builtin(Builtin::Leaf(Arc::new(self)))
    }
}

impl IntoComponent for &str {
    fn into_component(self) -> AnyComponent {
        Node::text(self).into_component()
    }
}

impl IntoComponent for String {
    fn into_component(self) -> AnyComponent {
        Node::text(self).into_component()
    }
}

/// Absent components render nothing and hold no preferences
impl<C: IntoComponent> IntoComponent for Option<C> {
    fn into_component(self) -> AnyComponent {
        match self {
            Some(component) => component.into_component(),
            None => Node::empty().into_component(),
        }
    }
}

impl<A: IntoComponent, B: IntoComponent> IntoComponent for (A, B) {
    fn into_component(self) -> AnyComponent {
        crate::builder::pair(self.0, self.1)
    }
}

/// One of two alternative components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Either<A, B> {
    First(A),
    Second(B),
}

impl<A: IntoComponent, B: IntoComponent> IntoComponent for Either<A, B> {
    fn into_component(self) -> AnyComponent {
        match self {
            Either::First(first) => first.into_component(),
            Either::Second(second) => second.into_component(),
        }
    }
}

/// Combinators available on every component
pub trait ComponentExt: IntoComponent + Sized {
    /// Write `value` for `key` at this point of the tree
    fn preference<T, V>(self, key: &PreferenceKey<T>, value: V) -> AnyComponent
    where
        T: Clone + Send + Sync + 'static,
        V: Into<T>,
    {
        let value: T = value.into();
        AnyComponent::Builtin(Builtin::PreferenceWriter(PreferenceWriter {
            key: key.id(),
            key_name: key.name(),
            value: Arc::new(value),
            child: Arc::new(self.into_component()),
        }))
    }

    /// Render this component with `key` set to `value`
    fn environment<T, V>(self, key: &EnvironmentKey<T>, value: V) -> AnyComponent
    where
        T: Clone + Send + Sync + 'static,
        V: Into<T>,
    {
        let key = *key;
        let value: T = value.into();
        AnyComponent::Builtin(Builtin::EnvironmentModifier(EnvironmentModifier {
            key_name: key.name(),
            transform: Arc::new(move |env: &Environment| env.set(&key, value.clone())),
            child: Arc::new(self.into_component()),
        }))
    }

    /// Render this component with the value of `key` transformed by `modify`
    fn modify_environment<T, F>(self, key: &EnvironmentKey<T>, modify: F) -> AnyComponent
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        let key = *key;
        AnyComponent::Builtin(Builtin::EnvironmentModifier(EnvironmentModifier {
            key_name: key.name(),
            transform: Arc::new(move |env: &Environment| env.modify(&key, &modify)),
            child: Arc::new(self.into_component()),
        }))
    }
}

impl<C: IntoComponent> ComponentExt for C {}

/// Create a component whose content is built from the render environment
pub fn environment_reader<F, C>(build: F) -> AnyComponent
where
    F: Fn(&Environment) -> C + Send + Sync + 'static,
    C: IntoComponent,
{
    AnyComponent::Builtin(Builtin::EnvironmentReader(EnvironmentReader {
        build: Arc::new(move |env: &Environment| build(env).into_component()),
    }))
}
