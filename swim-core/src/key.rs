//! Identity tokens for environment and preference keys

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_KEY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a key definition.
///
/// Two keys are the same key only if they share a `KeyId`, regardless of
/// their names or value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(u64);

impl KeyId {
    /// Mint a new identity
    pub fn fresh() -> Self {
        KeyId(NEXT_KEY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_distinct() {
        let a = KeyId::fresh();
        let b = KeyId::fresh();
        assert_ne!(a, b);
        assert!(a < b);
    }
}
