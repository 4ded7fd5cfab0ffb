//! Version-tracked cache wrapper for derived state.
//!
//! This module provides `Versioned<T>` which wraps cached data with the
//! version it was produced at, and `Memo` which recomputes a value only
//! when the key it was computed from changes. Downstream stages key on the
//! upstream `version`, so a change propagates exactly as far as it needs to.

/// Wrapper for cached data that tracks when it was computed.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    /// The cached data
    pub data: T,
    /// Bumped every time the owning stage recomputes
    pub version: u64,
}

impl<T> Versioned<T> {
    /// Check if this cache entry is stale relative to `current_version`.
    #[inline]
    pub fn is_stale(&self, current_version: u64) -> bool {
        self.version != current_version
    }

    /// Check if this cache entry is current.
    #[inline]
    pub fn is_current(&self, current_version: u64) -> bool {
        self.version == current_version
    }
}

/// Single-entry memo keyed on the inputs of one derivation stage.
#[derive(Debug, Clone)]
pub struct Memo<K, T> {
    entry: Option<(K, Versioned<T>)>,
    recomputes: u64,
}

impl<K, T> Default for Memo<K, T> {
    fn default() -> Self {
        Self {
            entry: None,
            recomputes: 0,
        }
    }
}

impl<K: PartialEq, T> Memo<K, T> {
    /// Return the cached value for `key`, computing it first on a miss.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> T) -> &Versioned<T> {
        if !matches!(&self.entry, Some((cached, _)) if *cached == key) {
            self.entry = None;
        }
        let recomputes = &mut self.recomputes;
        let (_, value) = self.entry.get_or_insert_with(|| {
            *recomputes += 1;
            let value = Versioned {
                data: compute(),
                version: *recomputes,
            };
            (key, value)
        });
        value
    }

    /// How many times this stage has computed a value.
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    /// Drop the cached value so the next read recomputes.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_hits_on_same_key() {
        let mut memo: Memo<u32, String> = Memo::default();
        assert_eq!(memo.get_or_compute(1, || "one".to_string()).data, "one");
        assert_eq!(memo.get_or_compute(1, || "uno".to_string()).data, "one");
        assert_eq!(memo.recomputes(), 1);
    }

    #[test]
    fn test_memo_recomputes_on_new_key() {
        let mut memo: Memo<u32, u32> = Memo::default();
        let first = memo.get_or_compute(1, || 10).version;
        let second = memo.get_or_compute(2, || 20).version;
        assert!(second > first);
        assert_eq!(memo.get_or_compute(2, || 0).data, 20);
    }

    #[test]
    fn test_versioned_staleness() {
        let cached = Versioned {
            data: (),
            version: 3,
        };
        assert!(cached.is_current(3));
        assert!(cached.is_stale(4));
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let mut memo: Memo<u32, u32> = Memo::default();
        memo.get_or_compute(1, || 1);
        memo.invalidate();
        memo.get_or_compute(1, || 1);
        assert_eq!(memo.recomputes(), 2);
    }
}
