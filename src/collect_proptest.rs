#![cfg(test)]

// Property tests for the conversions, checked against a naive model that
// scans the input backwards for the last pair with each key.

use crate::collect::{
    to_map, to_map_in, to_presence_map, to_presence_map_by, to_set_membership_map,
    to_set_membership_map_by, to_set_membership_map_in, try_to_map,
};
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

// Last-write-wins model: for each distinct key, the value of the last pair
// carrying it. Quadratic; shares no code with the conversions.
fn model_last_wins(pairs: &[(u8, i32)]) -> BTreeMap<u8, i32> {
    let keys: BTreeSet<u8> = pairs.iter().map(|(k, _)| *k).collect();
    keys.into_iter()
        .map(|k| {
            let v = pairs
                .iter()
                .rev()
                .find(|(kk, _)| *kk == k)
                .map(|(_, v)| *v)
                .unwrap_or_default();
            (k, v)
        })
        .collect()
}

fn sorted<K: Ord + Clone, V: Clone>(m: &HashMap<K, V>) -> BTreeMap<K, V> {
    m.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

// Small key space so duplicates are common.
fn arb_pairs() -> impl Strategy<Value = Vec<(u8, i32)>> {
    proptest::collection::vec((0u8..16, any::<i32>()), 0..64)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    // Property: keys are exactly the distinct elements; values all `true`/`()`.
    #[test]
    fn prop_membership_and_presence_keys(s in proptest::collection::vec("[a-d]{0,2}", 0..40)) {
        let distinct: BTreeSet<String> = s.iter().cloned().collect();

        let m = to_set_membership_map(s.iter().cloned());
        prop_assert_eq!(m.len(), distinct.len());
        prop_assert!(m.values().all(|v| *v));
        prop_assert_eq!(m.keys().cloned().collect::<BTreeSet<_>>(), distinct.clone());

        let p = to_presence_map(&s);
        prop_assert_eq!(p.len(), distinct.len());
        for k in &distinct {
            prop_assert!(p.contains_key(k));
        }
    }

    // Property: derived keys equal the image of `f`; `f` runs once per element.
    #[test]
    fn prop_by_variants_use_image_of_f(s in proptest::collection::vec(any::<i32>(), 0..64)) {
        let image: BTreeSet<i32> = s.iter().map(|x| x.rem_euclid(7)).collect();

        let calls = Cell::new(0usize);
        let m = to_set_membership_map_by(&s, |x| {
            calls.set(calls.get() + 1);
            x.rem_euclid(7)
        });
        prop_assert_eq!(calls.get(), s.len());
        prop_assert_eq!(m.keys().copied().collect::<BTreeSet<_>>(), image.clone());

        let p = to_presence_map_by(&s, |x| x.rem_euclid(7));
        prop_assert_eq!(p.keys().copied().collect::<BTreeSet<_>>(), image);
    }

    // Property: `to_map` keeps the value of the last element per key, for
    // every target.
    #[test]
    fn prop_to_map_last_write_wins(pairs in arb_pairs()) {
        let model = model_last_wins(&pairs);

        let m = to_map(&pairs, |&(k, v)| (k, v));
        prop_assert_eq!(sorted(&m), model.clone());

        let hb: hashbrown::HashMap<u8, i32> = to_map_in(&pairs, |&(k, v)| (k, v));
        prop_assert_eq!(hb.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(hb.get(k), Some(v));
        }

        let bt: BTreeMap<u8, i32> = to_map_in(&pairs, |&(k, v)| (k, v));
        prop_assert_eq!(bt, model);
    }

    // Property: two calls with a pure function give equal maps.
    #[test]
    fn prop_idempotent(pairs in arb_pairs()) {
        let a = to_map(&pairs, |&(k, v)| (k, v));
        let b = to_map(&pairs, |&(k, v)| (k, v));
        prop_assert_eq!(a, b);

        let x: BTreeMap<u8, bool> = to_set_membership_map_in(pairs.iter().map(|p| p.0));
        let y: BTreeMap<u8, bool> = to_set_membership_map_in(pairs.iter().map(|p| p.0));
        prop_assert_eq!(x, y);
    }

    // Property: `try_to_map` fails with the first `Err` and matches `to_map`
    // otherwise.
    #[test]
    fn prop_try_to_map(pairs in arb_pairs(), bad in proptest::option::of(0u8..16)) {
        let res: Result<HashMap<u8, i32>, usize> =
            try_to_map(pairs.iter().enumerate(), |(i, &(k, v))| {
                if Some(k) == bad { Err(i) } else { Ok((k, v)) }
            });
        let first_bad = pairs.iter().position(|(k, _)| Some(*k) == bad);
        match first_bad {
            Some(i) => prop_assert_eq!(res, Err(i)),
            None => prop_assert_eq!(res, Ok(to_map(&pairs, |&(k, v)| (k, v)))),
        }
    }
}
