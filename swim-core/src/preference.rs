//! Bottom-up aggregated values.
//!
//! A [`PreferenceKey`] declares a default and a merge function. Writers
//! attach values anywhere in a tree; reading a key walks the tree and
//! merges every value it meets, left to right. The merge receives the right
//! operand as a thunk, so a reducer that has already decided its result
//! (such as a logical or holding `true`) never walks the right subtree.

use crate::component::{AnyComponent, Builtin, IntoComponent};
use crate::error::{Result, SwimError};
use crate::key::KeyId;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Merge function: fold the lazily computed next value into the accumulator.
///
/// Values along a sequence are folded left to right, one item at a time, so
/// a reducer should be associative. Plain markup items are skipped without
/// consulting the reducer. For any other item, calling `next` is the only
/// way to learn whether it holds a value: when it holds none the accumulator
/// is restored, but a reducer that changes the accumulator without calling
/// `next` keeps its change. A reducer that does not call `next` also ends
/// the walk, and the remaining items are never expanded.
pub type Reducer<T> = fn(&mut T, &dyn Fn() -> T);

/// A typed preference key with a declared default and merge.
///
/// Keys are usually declared once as statics with
/// [`preference_key!`](crate::preference_key).
pub struct PreferenceKey<T> {
    id: KeyId,
    name: &'static str,
    default: fn() -> T,
    reduce: Reducer<T>,
}

impl<T> PreferenceKey<T> {
    /// Define a new key. Every call yields a distinct key.
    pub fn new(name: &'static str, default: fn() -> T, reduce: Reducer<T>) -> Self {
        Self {
            id: KeyId::fresh(),
            name,
            default,
            reduce,
        }
    }

    pub fn id(&self) -> KeyId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_value(&self) -> T {
        (self.default)()
    }

    /// Merge `next` into `value` with this key's reducer
    pub fn reduce(&self, value: &mut T, next: &dyn Fn() -> T) {
        (self.reduce)(value, next)
    }
}

impl PreferenceKey<bool> {
    /// A flag that is `false` unless any writer in the tree sets it
    pub fn flag(name: &'static str) -> Self {
        Self::new(name, || false, reduce_or)
    }
}

impl<T> Clone for PreferenceKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PreferenceKey<T> {}

impl<T> fmt::Debug for PreferenceKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceKey")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

/// Logical or; skips the right operand once the accumulator is `true`
pub fn reduce_or(value: &mut bool, next: &dyn Fn() -> bool) {
    *value = *value || next();
}

/// Logical and; skips the right operand once the accumulator is `false`
pub fn reduce_and(value: &mut bool, next: &dyn Fn() -> bool) {
    *value = *value && next();
}

/// Keep the leftmost value; the right operand is never evaluated
pub fn reduce_keep_first<T>(_value: &mut T, _next: &dyn Fn() -> T) {}

/// Keep the rightmost value
pub fn reduce_keep_last<T>(value: &mut T, next: &dyn Fn() -> T) {
    *value = next();
}

/// Concatenate collected items in tree order
pub fn reduce_extend<T>(value: &mut Vec<T>, next: &dyn Fn() -> Vec<T>) {
    value.extend(next());
}

pub fn reduce_max<T: Ord>(value: &mut T, next: &dyn Fn() -> T) {
    let next = next();
    if next > *value {
        *value = next;
    }
}

pub fn reduce_min<T: Ord>(value: &mut T, next: &dyn Fn() -> T) {
    let next = next();
    if next < *value {
        *value = next;
    }
}

impl AnyComponent {
    /// Read the aggregated value of `key`, falling back to its default
    pub fn read_preference<T>(&self, key: &PreferenceKey<T>) -> Result<T>
    where
        T: Clone + 'static,
    {
        Ok(self
            .preference_value(key)?
            .unwrap_or_else(|| key.default_value()))
    }

    /// Read the aggregated value of `key`; `None` if no writer was found
    pub fn preference_value<T>(&self, key: &PreferenceKey<T>) -> Result<Option<T>>
    where
        T: Clone + 'static,
    {
        self.reduce().read_preference(key)
    }
}

impl Builtin {
    /// Read `key` from this built-in without applying the default.
    ///
    /// A chain of pairs is walked along its right spine in a loop. Each item
    /// on the spine is merged into the accumulated value through the
    /// reducer's lazy operand, and the walk stops at the first item the
    /// reducer does not ask for.
    pub fn read_preference<T>(&self, key: &PreferenceKey<T>) -> Result<Option<T>>
    where
        T: Clone + 'static,
    {
        let (mut value, mut rest) = split_spine(self.clone(), key)?;

        while let Some(next) = rest.take() {
            if matches!(*next, AnyComponent::Builtin(Builtin::Leaf(_))) {
                break;
            }
            let Some(accumulated) = value.as_mut() else {
                (value, rest) = split_spine(next.reduce().into_owned(), key)?;
                continue;
            };

            let previous = accumulated.clone();
            let asked = Cell::new(false);
            let absent = Cell::new(false);
            let failure = RefCell::new(None);
            let remainder = RefCell::new(None);

            key.reduce(accumulated, &|| {
                asked.set(true);
                match split_spine(next.reduce().into_owned(), key) {
                    Ok((Some(item), tail)) => {
                        *remainder.borrow_mut() = tail;
                        item
                    }
                    Ok((None, tail)) => {
                        absent.set(true);
                        *remainder.borrow_mut() = tail;
                        key.default_value()
                    }
                    Err(err) => {
                        *failure.borrow_mut() = Some(err);
                        key.default_value()
                    }
                }
            });

            if let Some(err) = failure.into_inner() {
                return Err(err);
            }
            if absent.get() {
                *accumulated = previous;
            }
            if asked.get() {
                rest = remainder.into_inner();
            }
        }

        Ok(value)
    }
}

/// Split the spine at `builtin` into the value of its first item and the
/// rest of the chain, if any.
///
/// A writer for `key` covers its whole subtree, so it ends the chain.
fn split_spine<T>(
    builtin: Builtin,
    key: &PreferenceKey<T>,
) -> Result<(Option<T>, Option<Arc<AnyComponent>>)>
where
    T: Clone + 'static,
{
    let mut current = builtin;
    loop {
        let next = match &current {
            Builtin::Leaf(_) => return Ok((None, None)),
            Builtin::Pair(left, right) => {
                return Ok((left.preference_value(key)?, Some(Arc::clone(right))));
            }
            Builtin::PreferenceWriter(writer) if writer.key == key.id() => {
                return Ok((writer.value.downcast_ref::<T>().cloned(), None));
            }
            Builtin::PreferenceWriter(writer) => writer.child.reduce().into_owned(),
            Builtin::EnvironmentModifier(modifier) => modifier.child.reduce().into_owned(),
            Builtin::EnvironmentReader(_) => {
                debug!(key = key.name(), "preference read reached an environment reader");
                return Err(SwimError::Unsupported {
                    operation: "reading a preference",
                    component: current.kind(),
                });
            }
        };
        current = next;
    }
}

/// Read the aggregated value of `key` from `component`.
///
/// Returns the key's default when no writer for it exists in the tree, and
/// [`SwimError::Unsupported`] when the walk reaches an environment reader,
/// whose content is unknown until an environment is supplied.
pub fn read_preference<C, T>(component: C, key: &PreferenceKey<T>) -> Result<T>
where
    C: IntoComponent,
    T: Clone + 'static,
{
    component.into_component().read_preference(key)
}
