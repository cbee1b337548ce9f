use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(u16, u32),
    Get(u16),
    Sort,
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // narrow key space so duplicates are common
    let key = 0u16..256;
    let op = prop_oneof![
        50 => (key.clone(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        35 => key.prop_map(Op::Get),
        15 => Just(Op::Sort),
    ];
    prop::collection::vec(op, 0..=500)
}

fn validate_sorted(map: &OrderedArrayMap<u16, u32>) {
    for pair in map.entries().windows(2) {
        assert!(pair[0].key() < pair[1].key(), "entries must ascend after sort");
    }
}

/// Smallest `capacity * 2^k` that holds `len` entries
fn expected_capacity(capacity: usize, len: usize) -> usize {
    let mut expected = capacity;
    while expected < len {
        expected *= 2;
    }
    expected
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy(), capacity in 1usize..16) {
        let mut map = OrderedArrayMap::with_capacity(capacity).unwrap();
        let mut model: BTreeMap<u16, u32> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let was_present = model.contains_key(&k);
                    let result = map.insert(k, v);
                    if was_present {
                        prop_assert_eq!(result, Err(MapError::DuplicateKey));
                    } else {
                        prop_assert_eq!(result, Ok(()));
                        model.insert(k, v);
                    }
                    prop_assert!(map.contains_key(&k));
                }
                Op::Get(k) => {
                    // only trustworthy on a sorted map
                    if map.is_sorted() {
                        let expected = model.get(&k).ok_or(MapError::KeyNotFound);
                        prop_assert_eq!(map.get(&k), expected);
                    }
                }
                Op::Sort => {
                    map.sort();
                    validate_sorted(&map);
                }
            }

            prop_assert_eq!(map.len(), model.len());
            prop_assert_eq!(map.capacity(), expected_capacity(capacity, map.len()));
        }

        map.sort();
        validate_sorted(&map);
        let got: Vec<(u16, u32)> = map.entries().iter().map(|e| (*e.key(), *e.value())).collect();
        let expected: Vec<(u16, u32)> = model.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_sort_is_permutation(keys in prop::collection::hash_set(any::<i32>(), 0..300)) {
        let mut map = OrderedArrayMap::new();
        for k in keys.iter() {
            map.insert(*k, k.wrapping_mul(7)).unwrap();
        }

        let mut before: Vec<(i32, i32)> = map.entries().iter().map(|e| (*e.key(), *e.value())).collect();
        map.sort();
        let once: Vec<(i32, i32)> = map.entries().iter().map(|e| (*e.key(), *e.value())).collect();
        map.sort();
        let twice: Vec<(i32, i32)> = map.entries().iter().map(|e| (*e.key(), *e.value())).collect();

        before.sort();
        prop_assert_eq!(&once, &before);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_lookup_after_sort(
        keys in prop::collection::hash_set(0u32..10_000, 1..200),
        probes in prop::collection::vec(0u32..10_000, 0..50),
    ) {
        let mut map = OrderedArrayMap::with_capacity(1).unwrap();
        for k in keys.iter() {
            map.insert(*k, u64::from(*k) + 1).unwrap();
        }
        map.sort();

        for k in keys.iter() {
            prop_assert_eq!(map.get(k), Ok(&(u64::from(*k) + 1)));
        }
        for k in probes {
            if keys.contains(&k) {
                prop_assert!(map.get(&k).is_ok());
            } else {
                prop_assert_eq!(map.get(&k), Err(MapError::KeyNotFound));
            }
        }
    }
}
