//! MapTarget: the container a conversion writes into.
//!
//! Every conversion in [`crate::collect`] builds its output through this
//! trait, so the same linear pass can fill a std `HashMap`, a hashbrown
//! `HashMap`, or a `BTreeMap`.

use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, HashMap};

/// An associative container that can be pre-sized and filled pair by pair.
///
/// `insert_or_replace` must overwrite the value of an equal key that is
/// already present. Conversions apply pairs in input order, so this is what
/// makes the last occurrence of a key win.
pub trait MapTarget<K, V> {
    /// Create an empty container expecting about `capacity` entries.
    fn with_capacity_hint(capacity: usize) -> Self;

    /// Insert `key -> value`, replacing any previous value for `key`.
    fn insert_or_replace(&mut self, key: K, value: V);
}

impl<K, V, S> MapTarget<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn with_capacity_hint(capacity: usize) -> Self {
        HashMap::with_capacity_and_hasher(capacity, S::default())
    }

    #[inline]
    fn insert_or_replace(&mut self, key: K, value: V) {
        let _ = self.insert(key, value);
    }
}

impl<K, V, S> MapTarget<K, V> for hashbrown::HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn with_capacity_hint(capacity: usize) -> Self {
        hashbrown::HashMap::with_capacity_and_hasher(capacity, S::default())
    }

    #[inline]
    fn insert_or_replace(&mut self, key: K, value: V) {
        let _ = self.insert(key, value);
    }
}

// B-trees do not preallocate; the hint is dropped.
impl<K, V> MapTarget<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    #[inline]
    fn with_capacity_hint(_capacity: usize) -> Self {
        BTreeMap::new()
    }

    #[inline]
    fn insert_or_replace(&mut self, key: K, value: V) {
        let _ = self.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: the hash-based targets honor the capacity hint up front.
    #[test]
    fn hash_targets_preallocate() {
        let m: HashMap<u32, bool> = MapTarget::with_capacity_hint(64);
        assert!(m.is_empty());
        assert!(m.capacity() >= 64);

        let hb: hashbrown::HashMap<u32, bool> = MapTarget::with_capacity_hint(64);
        assert!(hb.is_empty());
        assert!(hb.capacity() >= 64);
    }

    /// Invariant: a zero hint still yields a usable, empty container.
    #[test]
    fn zero_hint_is_empty() {
        let mut m: HashMap<&str, ()> = MapTarget::with_capacity_hint(0);
        assert!(m.is_empty());
        m.insert_or_replace("a", ());
        assert_eq!(m.len(), 1);

        let b: BTreeMap<&str, ()> = MapTarget::with_capacity_hint(0);
        assert!(b.is_empty());
    }

    /// Invariant: inserting an equal key replaces the value and keeps one entry.
    #[test]
    fn insert_or_replace_overwrites() {
        let mut m: HashMap<u8, &str> = MapTarget::with_capacity_hint(2);
        m.insert_or_replace(1, "a");
        m.insert_or_replace(1, "z");
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(&1), Some(&"z"));

        let mut hb: hashbrown::HashMap<u8, &str> = MapTarget::with_capacity_hint(2);
        hb.insert_or_replace(1, "a");
        hb.insert_or_replace(1, "z");
        assert_eq!(hb.len(), 1);
        assert_eq!(hb.get(&1), Some(&"z"));

        let mut b: BTreeMap<u8, &str> = MapTarget::with_capacity_hint(2);
        b.insert_or_replace(1, "a");
        b.insert_or_replace(1, "z");
        assert_eq!(b.len(), 1);
        assert_eq!(b.get(&1), Some(&"z"));
    }

    /// Invariant: under a constant hasher every key lands in one bucket, yet
    /// distinct keys stay distinct and equal keys still overwrite.
    #[test]
    fn collision_handling_with_const_hasher() {
        #[derive(Clone, Default)]
        struct ConstBuildHasher;
        struct ConstHasher;
        impl BuildHasher for ConstBuildHasher {
            type Hasher = ConstHasher;
            fn build_hasher(&self) -> Self::Hasher {
                ConstHasher
            }
        }
        impl core::hash::Hasher for ConstHasher {
            fn write(&mut self, _bytes: &[u8]) {}
            fn finish(&self) -> u64 {
                0
            } // force all keys into the same hash bucket
        }

        let mut m: HashMap<String, i32, ConstBuildHasher> = MapTarget::with_capacity_hint(4);
        m.insert_or_replace("a".to_string(), 1);
        m.insert_or_replace("b".to_string(), 2);
        m.insert_or_replace("a".to_string(), 3);
        assert_eq!(m.len(), 2);
        assert_eq!(m.get("a"), Some(&3));
        assert_eq!(m.get("b"), Some(&2));

        let mut hb: hashbrown::HashMap<String, i32, ConstBuildHasher> =
            MapTarget::with_capacity_hint(4);
        hb.insert_or_replace("a".to_string(), 1);
        hb.insert_or_replace("b".to_string(), 2);
        assert_eq!(hb.len(), 2);
        assert_eq!(hb.get("a"), Some(&1));
    }
}
