use std::cell::Cell;
use std::rc::Rc;

use tiervec::TieredVec;
use tiervec_test_utils::fixtures::{strings, Tracked};

fn tracked(len: u32, drops: &Rc<Cell<usize>>) -> TieredVec<Tracked> {
    (0..len).map(|id| Tracked::new(id, drops)).collect()
}

#[test]
fn pop_hands_ownership_to_caller() {
    let drops = Rc::new(Cell::new(0));
    let mut vec = tracked(3, &drops);
    let last = vec.pop().unwrap();
    assert_eq!(last.id, 2);
    assert_eq!(drops.get(), 0);
    drop(last);
    assert_eq!(drops.get(), 1);
}

#[test]
fn resize_down_drops_trimmed_elements() {
    let drops = Rc::new(Cell::new(0));
    let mut vec = tracked(3000, &drops);
    vec.resize(1000);
    assert_eq!(drops.get(), 2000);
    assert_eq!(vec.block_count(), 3);
    vec.resize(3000);
    assert!((1000..3000).all(|i| !vec[i].is_tracked()));
}

#[test]
fn dropping_container_drops_every_element() {
    let drops = Rc::new(Cell::new(0));
    let vec = tracked(2500, &drops);
    drop(vec);
    assert_eq!(drops.get(), 2500);
}

#[test]
fn take_transfers_without_dropping() {
    let drops = Rc::new(Cell::new(0));
    let mut vec = tracked(1500, &drops);
    let moved = vec.take();
    assert_eq!(drops.get(), 0);
    drop(vec);
    assert_eq!(drops.get(), 0);
    drop(moved);
    assert_eq!(drops.get(), 1500);
}

#[test]
fn clear_drops_but_keeps_blocks() {
    let drops = Rc::new(Cell::new(0));
    let mut vec = tracked(2048, &drops);
    vec.clear();
    assert_eq!(drops.get(), 2048);
    assert_eq!(vec.block_count(), 2);
}

#[test]
fn into_iter_drops_unconsumed_elements() {
    let drops = Rc::new(Cell::new(0));
    let vec = tracked(10, &drops);
    let mut it = vec.into_iter();
    let first = it.next().unwrap();
    drop(it);
    assert_eq!(drops.get(), 9);
    assert_eq!(first.id, 0);
}

#[test]
fn clone_duplicates_owned_strings() {
    let original = strings(1200);
    let copy = original.clone();
    drop(original);
    assert_eq!(copy[1199], "1199");
}
