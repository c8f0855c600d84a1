//! Registry bookkeeping across every allocation and deallocation path.
//!
//! Every array created directly or by a combinator must be counted
//! exactly once, and every teardown path must leave stale handles inert.

use dynarray::prelude::*;
use dynarray_test_utils::{array_of, values};

#[test]
fn three_arrays_then_destroy_all() {
    let mut reg = Registry::new();
    let ids: Vec<ArrayId> = (0..3).map(|_| reg.create(10).unwrap()).collect();
    assert_eq!(reg.count(), 3);

    reg.destroy_all();
    assert_eq!(reg.count(), 0);
    for id in &ids {
        assert!(!reg.is_valid(*id));
    }
}

#[test]
fn destroy_after_destroy_all_is_noop() {
    let mut reg = Registry::new();
    let a = reg.create(1).unwrap();
    let b = reg.create(1).unwrap();
    reg.destroy_all();

    assert!(!reg.destroy(a));
    assert!(!reg.destroy(b));
    assert_eq!(reg.count(), 0);
    assert_eq!(reg.append(a, 1.0), Err(ArrayError::Destroyed { id: a }));
}

#[test]
fn individual_destroy_tracks_count() {
    let mut reg = Registry::new();
    let a = reg.create(1).unwrap();
    let b = reg.create(1).unwrap();
    let c = reg.create(1).unwrap();

    assert!(reg.destroy(b));
    assert_eq!(reg.count(), 2);
    assert!(reg.is_valid(a));
    assert!(!reg.is_valid(b));
    assert!(reg.is_valid(c));
}

#[test]
fn every_combinator_registers_its_output() {
    let mut reg = Registry::new();
    let a = array_of(&mut reg, &[3.0, 1.0, 3.0, -2.0]);
    assert_eq!(reg.count(), 1);

    let derived = [
        reg.copy(a).unwrap(),
        reg.range(0.0, 3.0, 1.0).unwrap(),
        reg.concat(a, a).unwrap(),
        reg.take(a, -6).unwrap(),
        reg.filter(a, |x| x < 0.0).unwrap(),
        reg.unique(a).unwrap(),
    ];
    assert_eq!(reg.count(), 1 + derived.len());

    let chunks = reg.split(a, 2).unwrap();
    assert_eq!(reg.count(), 1 + derived.len() + chunks.len());

    let mut all: Vec<ArrayId> = reg.ids().collect();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), reg.count(), "each live array appears exactly once");
}

#[test]
fn destroying_source_leaves_derived_intact() {
    let mut reg = Registry::new();
    let a = array_of(&mut reg, &[1.0, 2.0, 3.0, 4.0]);
    let chunks = reg.split(a, 2).unwrap();
    let u = reg.unique(a).unwrap();
    reg.destroy(a);

    assert_eq!(values(&reg, chunks[0]), vec![1.0, 2.0]);
    assert_eq!(values(&reg, chunks[1]), vec![3.0, 4.0]);
    assert_eq!(values(&reg, u), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn registries_are_isolated() {
    let mut left = Registry::new();
    let mut right = Registry::new();
    left.create(1).unwrap();
    left.create(1).unwrap();
    right.create(1).unwrap();

    left.destroy_all();
    assert_eq!(left.count(), 0);
    assert_eq!(right.count(), 1);
}

#[test]
fn slot_reuse_after_bulk_teardown() {
    let mut reg = Registry::new();
    let old: Vec<ArrayId> = (0..4).map(|_| reg.create(1).unwrap()).collect();
    reg.destroy_all();
    let new: Vec<ArrayId> = (0..4).map(|_| reg.create(1).unwrap()).collect();

    for id in &old {
        assert!(!reg.is_valid(*id));
        assert!(!new.contains(id));
    }
    for id in &new {
        assert!(reg.is_valid(*id));
    }
    assert_eq!(reg.count(), 4);
}

#[test]
fn memory_released_on_teardown() {
    let mut reg = Registry::new();
    let a = reg.range(0.0, 99.0, 1.0).unwrap();
    assert!(reg.memory_bytes() >= 100 * std::mem::size_of::<f64>());
    reg.destroy(a);
    assert_eq!(reg.memory_bytes(), 0);
}

#[cfg(not(miri))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Create(usize),
        Copy(usize),
        Split(usize, i64),
        Destroy(usize),
        DestroyAll,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0usize..8).prop_map(Op::Create),
            2 => any::<usize>().prop_map(Op::Copy),
            2 => (any::<usize>(), -1i64..4).prop_map(|(i, n)| Op::Split(i, n)),
            3 => any::<usize>().prop_map(Op::Destroy),
            1 => Just(Op::DestroyAll),
        ]
    }

    proptest! {
        #[test]
        fn count_always_matches_model(ops in proptest::collection::vec(arb_op(), 1..80)) {
            let mut reg = Registry::new();
            let mut live: Vec<ArrayId> = Vec::new();
            let mut dead: Vec<ArrayId> = Vec::new();

            for op in ops {
                match op {
                    Op::Create(n) => {
                        let id = reg.create(n).unwrap();
                        for i in 0..n {
                            reg.append(id, i as f64).unwrap();
                        }
                        live.push(id);
                    }
                    Op::Copy(pick) if !live.is_empty() => {
                        let src = live[pick % live.len()];
                        live.push(reg.copy(src).unwrap());
                    }
                    Op::Split(pick, n) if !live.is_empty() => {
                        let src = live[pick % live.len()];
                        live.extend(reg.split(src, n).unwrap());
                    }
                    Op::Destroy(pick) if !live.is_empty() => {
                        let id = live.swap_remove(pick % live.len());
                        prop_assert!(reg.destroy(id));
                        dead.push(id);
                    }
                    Op::DestroyAll => {
                        prop_assert_eq!(reg.destroy_all(), live.len());
                        dead.append(&mut live);
                    }
                    _ => {}
                }
                prop_assert_eq!(reg.count(), live.len());
            }

            for id in &dead {
                prop_assert!(!reg.is_valid(*id));
                prop_assert!(!reg.destroy(*id));
            }
            for id in &live {
                prop_assert!(reg.is_valid(*id));
            }
        }
    }
}
