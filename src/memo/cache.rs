//! Dependency-keyed caches.
//!
//! [`DepCache`] is a single slot holding `(deps, value)`. Asking for a value
//! with dependencies that shallow-equal the stored ones returns the stored
//! value; anything else recomputes and replaces it. There is no eviction
//! beyond that: the slot only ever holds the latest pair.

use super::shallow::ShallowEq;
use super::shared::{Callback, Shared};

/// Single-slot cache keyed on an explicit dependency tuple.
#[derive(Debug)]
pub struct DepCache<D, T> {
    slot: Option<(D, T)>,
    hits: u64,
    misses: u64,
}

impl<D, T> Default for DepCache<D, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, T> DepCache<D, T> {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self {
            slot: None,
            hits: 0,
            misses: 0,
        }
    }

    /// The cached value, if any.
    pub fn value(&self) -> Option<&T> {
        self.slot.as_ref().map(|(_, value)| value)
    }

    /// The dependencies the cached value was computed from.
    pub fn deps(&self) -> Option<&D> {
        self.slot.as_ref().map(|(deps, _)| deps)
    }

    /// Number of lookups answered from the slot.
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to recompute.
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop the cached pair; the next lookup recomputes.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

impl<D: ShallowEq, T> DepCache<D, T> {
    /// Return the cached value if `deps` are unchanged, otherwise compute,
    /// store and return a new one.
    pub fn get_or_compute(&mut self, deps: D, compute: impl FnOnce(&D) -> T) -> &T {
        let hit = matches!(&self.slot, Some((previous, _)) if previous.shallow_eq(&deps));
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.slot = None;
        }
        // Only an emptied slot runs the closure.
        let (_, value) = self.slot.get_or_insert_with(move || {
            let value = compute(&deps);
            (deps, value)
        });
        value
    }
}

/// Memoized derived value: the value-level half of the demo.
///
/// Returns a [`Shared`] whose identity is stable for as long as the
/// dependencies are.
#[derive(Debug)]
pub struct MemoSlot<D, T> {
    cache: DepCache<D, Shared<T>>,
}

impl<D, T> Default for MemoSlot<D, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, T> MemoSlot<D, T> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            cache: DepCache::new(),
        }
    }

    /// Access the underlying cache (hit/miss counters).
    pub const fn cache(&self) -> &DepCache<D, Shared<T>> {
        &self.cache
    }
}

impl<D: ShallowEq, T> MemoSlot<D, T> {
    /// Get the memoized value for `deps`, computing it on a miss.
    pub fn get(&mut self, deps: D, compute: impl FnOnce(&D) -> T) -> Shared<T> {
        self.cache
            .get_or_compute(deps, |deps| Shared::new(compute(deps)))
            .clone()
    }
}

/// Memoized callback: keeps handing out the same [`Callback`] until the
/// dependencies change.
///
/// The closure is passed on every call, as it would be written inline at the
/// call site, but only wrapped into a new identity on a miss.
#[derive(Debug)]
pub struct CallbackSlot<D> {
    cache: DepCache<D, Callback>,
}

impl<D> Default for CallbackSlot<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> CallbackSlot<D> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            cache: DepCache::new(),
        }
    }

    /// Access the underlying cache (hit/miss counters).
    pub const fn cache(&self) -> &DepCache<D, Callback> {
        &self.cache
    }
}

impl<D: ShallowEq> CallbackSlot<D> {
    /// Get the stable callback for `deps`.
    pub fn get(&mut self, deps: D, f: impl Fn() + 'static) -> Callback {
        self.cache
            .get_or_compute(deps, move |_| Callback::new(f))
            .clone()
    }
}
