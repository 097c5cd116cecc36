//! Collision registry — deduplication of issued digests
//!
//! The uniqueness guarantee lives here: a digest is never issued twice within
//! the registry's lifetime. The capability is a trait; deployments spanning
//! multiple processes inject a shared store, the default is an in-memory set
//! with process lifetime.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Deduplication capability over issued digest values.
pub trait CollisionRegistry: Send {
    /// Whether this digest was already issued.
    fn has(&self, digest: &str) -> bool;
    /// Record a digest as issued.
    fn put(&mut self, digest: &str);
    /// Number of digests issued so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime in-memory registry.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InMemoryRegistry {
    issued: HashSet<String>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollisionRegistry for InMemoryRegistry {
    fn has(&self, digest: &str) -> bool {
        self.issued.contains(digest)
    }

    fn put(&mut self, digest: &str) {
        self.issued.insert(digest.to_string());
    }

    fn len(&self) -> usize {
        self.issued.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_then_has() {
        let mut registry = InMemoryRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.has("abc123"));

        registry.put("abc123");
        assert!(registry.has("abc123"));
        assert_eq!(registry.len(), 1);

        registry.put("abc123");
        assert_eq!(registry.len(), 1);
    }
}
