//! End-to-end walk through the common container operations.

use tiervec::TieredVec;

#[test]
fn walkthrough() {
    let mut tv: TieredVec<i32> = TieredVec::new();
    for i in 0..5000 {
        tv.push(3 * i);
    }
    assert_eq!(tv.len(), 5000);
    assert_eq!(tv.capacity(), 8192);
    assert_eq!(tv[1000], 3000);
    assert_eq!(tv[4000], 12_000);

    let copy_tv = tv.clone();
    assert_eq!(copy_tv.len(), 5000);
    assert_eq!(copy_tv[1234], 3702);

    let mut move_tv = tv.take();
    assert_eq!(move_tv.len(), 5000);
    assert_eq!(tv.len(), 0);

    move_tv.resize(2000);
    assert_eq!(move_tv.len(), 2000);
    move_tv.resize(8000);
    assert_eq!(move_tv.len(), 8000);
    assert_eq!(move_tv[1999], 5997);
    assert_eq!(move_tv[2000], 0);

    let mut assigned = TieredVec::new();
    assert!(assigned.is_empty());
    assigned.clone_from(&copy_tv);
    assert_eq!(assigned.len(), 5000);

    for _ in 0..1000 {
        assigned.pop();
    }
    assert_eq!(assigned.len(), 4000);
    // 4000 elements need 4 blocks; the fifth is kept as slack.
    assert_eq!(assigned.block_count(), 5);
}
