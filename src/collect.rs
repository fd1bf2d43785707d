//! Sequence-to-map conversions.
//!
//! Every function here makes one pass over its input, calls the supplied
//! closure (if any) exactly once per element in input order, and applies
//! each resulting pair with insert-or-replace. A key produced by several
//! elements therefore keeps the value of the last one.
//!
//! Any `IntoIterator` is accepted as input, including `Option<I>`: `None`
//! yields no elements and produces an empty map.

use crate::target::MapTarget;
use core::hash::Hash;
use std::collections::HashMap;

#[inline]
fn capacity_hint<I: Iterator>(iter: &I) -> usize {
    iter.size_hint().0
}

/// Build a map from each element to `true`.
///
/// ```
/// let m = collect_map::to_set_membership_map(["a", "b", "a"]);
/// assert_eq!(m.len(), 2);
/// assert_eq!(m.get("a"), Some(&true));
/// ```
pub fn to_set_membership_map<I>(s: I) -> HashMap<I::Item, bool>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    to_set_membership_map_in(s)
}

/// Like [`to_set_membership_map`], writing into any [`MapTarget`].
pub fn to_set_membership_map_in<M, I>(s: I) -> M
where
    I: IntoIterator,
    M: MapTarget<I::Item, bool>,
{
    to_map_in(s, |e| (e, true))
}

/// Build a map from `f(element)` to `true`.
pub fn to_set_membership_map_by<I, F, Fk>(s: I, f: Fk) -> HashMap<F, bool>
where
    I: IntoIterator,
    F: Eq + Hash,
    Fk: FnMut(I::Item) -> F,
{
    to_set_membership_map_by_in(s, f)
}

/// Like [`to_set_membership_map_by`], writing into any [`MapTarget`].
pub fn to_set_membership_map_by_in<M, I, F, Fk>(s: I, mut f: Fk) -> M
where
    I: IntoIterator,
    Fk: FnMut(I::Item) -> F,
    M: MapTarget<F, bool>,
{
    to_map_in(s, |e| (f(e), true))
}

/// Build a map from each element to the zero-size marker `()`.
///
/// ```
/// let m = collect_map::to_presence_map(vec![1, 2, 2, 3]);
/// assert_eq!(m.len(), 3);
/// assert!(m.contains_key(&2));
/// ```
pub fn to_presence_map<I>(s: I) -> HashMap<I::Item, ()>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    to_presence_map_in(s)
}

/// Like [`to_presence_map`], writing into any [`MapTarget`].
pub fn to_presence_map_in<M, I>(s: I) -> M
where
    I: IntoIterator,
    M: MapTarget<I::Item, ()>,
{
    to_map_in(s, |e| (e, ()))
}

/// Build a map from `f(element)` to the zero-size marker `()`.
pub fn to_presence_map_by<I, F, Fk>(s: I, f: Fk) -> HashMap<F, ()>
where
    I: IntoIterator,
    F: Eq + Hash,
    Fk: FnMut(I::Item) -> F,
{
    to_presence_map_by_in(s, f)
}

/// Like [`to_presence_map_by`], writing into any [`MapTarget`].
pub fn to_presence_map_by_in<M, I, F, Fk>(s: I, mut f: Fk) -> M
where
    I: IntoIterator,
    Fk: FnMut(I::Item) -> F,
    M: MapTarget<F, ()>,
{
    to_map_in(s, |e| (f(e), ()))
}

/// Build a general key-value map; `kv` turns each element into a pair.
///
/// Later pairs overwrite earlier ones with an equal key:
///
/// ```
/// let m = collect_map::to_map([(1, "a"), (1, "z")], |(k, v)| (k, v));
/// assert_eq!(m.get(&1), Some(&"z"));
/// ```
pub fn to_map<I, K, V, Kv>(s: I, kv: Kv) -> HashMap<K, V>
where
    I: IntoIterator,
    K: Eq + Hash,
    Kv: FnMut(I::Item) -> (K, V),
{
    to_map_in(s, kv)
}

/// Like [`to_map`], writing into any [`MapTarget`].
pub fn to_map_in<M, I, K, V, Kv>(s: I, mut kv: Kv) -> M
where
    I: IntoIterator,
    Kv: FnMut(I::Item) -> (K, V),
    M: MapTarget<K, V>,
{
    let iter = s.into_iter();
    let mut m = M::with_capacity_hint(capacity_hint(&iter));
    for e in iter {
        let (k, v) = kv(e);
        m.insert_or_replace(k, v);
    }
    m
}

/// Fallible [`to_map`]: stops at the first `Err` from `kv` and returns it.
///
/// No element after the failing one is visited and the partial map is
/// discarded.
pub fn try_to_map<I, K, V, E, Kv>(s: I, kv: Kv) -> Result<HashMap<K, V>, E>
where
    I: IntoIterator,
    K: Eq + Hash,
    Kv: FnMut(I::Item) -> Result<(K, V), E>,
{
    try_to_map_in(s, kv)
}

/// Like [`try_to_map`], writing into any [`MapTarget`].
pub fn try_to_map_in<M, I, K, V, E, Kv>(s: I, mut kv: Kv) -> Result<M, E>
where
    I: IntoIterator,
    Kv: FnMut(I::Item) -> Result<(K, V), E>,
    M: MapTarget<K, V>,
{
    let iter = s.into_iter();
    let mut m = M::with_capacity_hint(capacity_hint(&iter));
    for e in iter {
        let (k, v) = kv(e)?;
        m.insert_or_replace(k, v);
    }
    Ok(m)
}
