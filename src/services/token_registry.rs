use crate::domain::notification::PushToken;
use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-lifetime set of push destinations.
///
/// Clones share the same underlying set. Tokens are only ever added; the set starts
/// empty on every boot and is dropped with the process.
#[derive(Clone, Debug, Default)]
pub struct TokenRegistry {
    tokens: Arc<RwLock<BTreeSet<PushToken>>>,
}

impl TokenRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token. Returns `false` if it was already registered.
    pub fn register(&self, token: PushToken) -> bool {
        self.write().insert(token)
    }

    /// Point-in-time copy of the membership. The lock is released before this returns.
    #[must_use]
    pub fn all(&self) -> Vec<PushToken> {
        self.read().iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Inserts never leave the set half-updated, so a poisoned lock still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, BTreeSet<PushToken>> {
        self.tokens.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeSet<PushToken>> {
        self.tokens.write().unwrap_or_else(PoisonError::into_inner)
    }
}
