//! Sequencing helpers for building component trees

use crate::component::{AnyComponent, Builtin, Either, IntoComponent};
use std::sync::Arc;
use swim_html::Node;

/// A component that renders nothing and holds no preferences
pub fn empty() -> AnyComponent {
    Node::empty().into_component()
}

/// Combine two components, rendered left then right
pub fn pair<A, B>(left: A, right: B) -> AnyComponent
where
    A: IntoComponent,
    B: IntoComponent,
{
    AnyComponent::Builtin(Builtin::Pair(
        Arc::new(left.into_component()),
        Arc::new(right.into_component()),
    ))
}

/// Fold components into a right-leaning chain of pairs.
///
/// An empty sequence is [`empty`]; a single component is returned as is.
pub fn sequence<I>(components: I) -> AnyComponent
where
    I: IntoIterator,
    I::Item: IntoComponent,
{
    let mut items: Vec<AnyComponent> = components
        .into_iter()
        .map(IntoComponent::into_component)
        .collect();

    let Some(mut chain) = items.pop() else {
        return empty();
    };
    while let Some(previous) = items.pop() {
        chain = pair(previous, chain);
    }
    chain
}

/// Include `component` only when present
pub fn optional<C: IntoComponent>(component: Option<C>) -> AnyComponent {
    component.into_component()
}

/// Include whichever branch was chosen
pub fn either<A, B>(choice: Either<A, B>) -> AnyComponent
where
    A: IntoComponent,
    B: IntoComponent,
{
    choice.into_component()
}

/// Build and include a component only when `condition` holds
pub fn when<C, F>(condition: bool, build: F) -> AnyComponent
where
    C: IntoComponent,
    F: FnOnce() -> C,
{
    optional(condition.then(build))
}

/// Sequence components of different types.
///
/// ```
/// use swim_core::{render_to_string, sequence};
/// use swim_html::tags::{h1, p};
///
/// let page = sequence![h1(["Title"]), "plain text", p(["Body"])];
/// assert_eq!(render_to_string(page), "<h1>Title</h1>\nplain text\n<p>Body</p>\n");
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::empty()
    };
    ($($component:expr),+ $(,)?) => {
        $crate::sequence([$($crate::IntoComponent::into_component($component)),+])
    };
}
