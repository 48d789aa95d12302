//! Top-down configuration passed to components at render time.
//!
//! An [`Environment`] maps key identities to values. It is never mutated
//! while a tree renders: modifiers derive a new store for their subtree with
//! [`Environment::set`] or [`Environment::modify`], and the parent's store
//! stays as it was for every sibling.

use crate::key::KeyId;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A typed environment key with a declared default.
///
/// Keys are usually declared once as statics with
/// [`environment_key!`](crate::environment_key).
pub struct EnvironmentKey<T> {
    id: KeyId,
    name: &'static str,
    default: fn() -> T,
}

impl<T> EnvironmentKey<T> {
    /// Define a new key. Every call yields a distinct key.
    pub fn new(name: &'static str, default: fn() -> T) -> Self {
        Self {
            id: KeyId::fresh(),
            name,
            default,
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
}

impl<T> Clone for EnvironmentKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EnvironmentKey<T> {}

impl<T> fmt::Debug for EnvironmentKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentKey")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Clone)]
struct Entry {
    name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

/// Immutable key/value store read by components while rendering
#[derive(Clone, Default)]
pub struct Environment {
    values: HashMap<KeyId, Entry>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value stored for `key`, or the key's default
    pub fn get<T>(&self, key: &EnvironmentKey<T>) -> T
    where
        T: Clone + 'static,
    {
        self.values
            .get(&key.id())
            .and_then(|entry| entry.value.downcast_ref::<T>())
            .cloned()
            .unwrap_or_else(|| key.default_value())
    }

    /// Return a copy of this store with `key` set to `value`
    pub fn set<T>(&self, key: &EnvironmentKey<T>, value: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        let mut copy = self.clone();
        copy.values.insert(
            key.id(),
            Entry {
                name: key.name(),
                value: Arc::new(value),
            },
        );
        copy
    }

    /// Return a copy of this store with the value of `key` transformed in place
    pub fn modify<T, F>(&self, key: &EnvironmentKey<T>, modify: F) -> Self
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce(&mut T),
    {
        let mut value = self.get(key);
        modify(&mut value);
        self.set(key, value)
    }

    /// Check if a value was explicitly set for `key`
    pub fn contains<T>(&self, key: &EnvironmentKey<T>) -> bool {
        self.values.contains_key(&key.id())
    }

    /// Number of explicitly set keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self
            .values
            .iter()
            .map(|(id, entry)| (*id, entry.name))
            .collect();
        keys.sort();
        f.debug_struct("Environment").field("keys", &keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_key_reads_default() {
        let key = EnvironmentKey::new("greeting", || "Hello".to_string());
        let env = Environment::new();
        assert_eq!(env.get(&key), "Hello");
        assert!(!env.contains(&key));
    }

    #[test]
    fn test_set_leaves_receiver_unchanged() {
        let key = EnvironmentKey::new("greeting", || "Hello".to_string());
        let base = Environment::new();
        let derived = base.set(&key, "Hi".to_string());

        assert_eq!(base.get(&key), "Hello");
        assert_eq!(derived.get(&key), "Hi");
        assert_eq!(derived.len(), 1);
        assert!(base.is_empty());
    }

    #[test]
    fn test_modify_starts_from_default() {
        let depth = EnvironmentKey::new("depth", || 1u32);
        let env = Environment::new().modify(&depth, |d| *d += 1);
        let env = env.modify(&depth, |d| *d *= 10);
        assert_eq!(env.get(&depth), 20);
    }

    #[test]
    fn test_keys_with_same_type_are_distinct() {
        let title = EnvironmentKey::new("label", || String::from("title"));
        let subtitle = EnvironmentKey::new("label", || String::from("subtitle"));

        let env = Environment::new().set(&title, "Swim".to_string());
        assert_eq!(env.get(&title), "Swim");
        assert_eq!(env.get(&subtitle), "subtitle");
    }
}
