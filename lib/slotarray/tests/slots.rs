use std::{cell::Cell, rc::Rc};

use quickcheck_macros::quickcheck;
use slotarray::SlotArray;

#[derive(Debug, Clone)]
struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn set_replaces_and_returns_previous() {
    let mut s = SlotArray::<&str, 16>::new();
    assert_eq!(s.set(3, "a"), None);
    assert_eq!(s.set(3, "b"), Some("a"));
    assert_eq!(s.len(), 1);
    assert_eq!(s[3], "b");
}

#[test]
fn remove_frees_slot() {
    let mut s = SlotArray::<u8, 8>::new();
    s.set(0, 1);
    s.set(1, 2);
    assert_eq!(s.first_free(), Some(2));
    assert_eq!(s.remove(0), Some(1));
    assert_eq!(s.remove(0), None);
    assert_eq!(s.first_free(), Some(0));
    assert_eq!(s.len(), 1);
}

#[test]
fn full_array_has_no_free_slot() {
    let s: SlotArray<usize, 4> = (0..4).map(|i| (i, i)).collect();
    assert!(s.is_full());
    assert_eq!(s.first_free(), None);
}

#[test]
fn out_of_range_reads_are_none() {
    let s = SlotArray::<u8, 4>::new();
    assert_eq!(s.get(4), None);
    assert_eq!(s.get(63), None);
    assert!(!s.is_occupied(100));
}

#[test]
fn drops_exactly_once() {
    let drops = Rc::new(Cell::new(0));
    {
        let mut s = SlotArray::<DropCounter, 16>::new();
        s.set(2, DropCounter(drops.clone()));
        s.set(7, DropCounter(drops.clone()));
        s.set(9, DropCounter(drops.clone()));
        // replaced value is returned, then dropped here
        drop(s.set(2, DropCounter(drops.clone())));
        assert_eq!(drops.get(), 1);
        drop(s.remove(7));
        assert_eq!(drops.get(), 2);
        let c = s.clone();
        drop(c);
        assert_eq!(drops.get(), 4);
    }
    assert_eq!(drops.get(), 6);
}

#[test]
fn map_preserves_occupancy() {
    let mut s = SlotArray::<u32, 16>::new();
    s.set(1, 10);
    s.set(12, 20);
    let m = s.map(|i, v| (i as u32) + v);
    assert_eq!(m.mask(), s.mask());
    assert_eq!(m[1], 11);
    assert_eq!(m[12], 32);
}

#[test]
fn try_map_stops_at_error() {
    let s: SlotArray<i32, 8> = [(0, 1), (3, -1), (5, 2)].into_iter().collect();
    let res: Result<SlotArray<u32, 8>, i32> =
        s.try_map(|_, &v| if v < 0 { Err(v) } else { Ok(v as u32) });
    assert_eq!(res, Err(-1));
}

/// A SlotArray behaves like `[Option<T>; N]` under any sequence of sets and removes.
#[quickcheck]
fn matches_option_array(ops: Vec<(bool, u8, u16)>) -> bool {
    let mut model: [Option<u16>; 16] = [None; 16];
    let mut s = SlotArray::<u16, 16>::new();
    for (insert, slot, value) in ops {
        let slot = (slot % 16) as usize;
        if insert {
            if s.set(slot, value) != model[slot].replace(value) {
                return false;
            }
        } else if s.remove(slot) != model[slot].take() {
            return false;
        }
    }
    let expected: Vec<(usize, u16)> = model
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| (i, v)))
        .collect();
    let actual: Vec<(usize, u16)> = s.iter().map(|(i, v)| (i, *v)).collect();
    s.len() == expected.len() && actual == expected
}
