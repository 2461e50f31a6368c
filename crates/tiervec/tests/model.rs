use proptest::prelude::*;
use tiervec::TieredVec;
use tiervec_test_utils::{
    apply, arb_config, arb_ops, assert_invariants, assert_matches_model, FlatModel, Op,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn container_tracks_flat_model(ops in arb_ops(40)) {
        let mut vec = TieredVec::new();
        let mut model = FlatModel::new();
        for op in &ops {
            apply(&mut vec, op);
            model.apply(op);
            assert_invariants(&vec);
        }
        assert_matches_model(&vec, &model);
    }

    #[test]
    fn shrink_slack_is_honoured(config in arb_config(), ops in arb_ops(30)) {
        let mut vec = TieredVec::with_config(config);
        let mut model = FlatModel::with_config(config);
        for op in &ops {
            apply(&mut vec, op);
            model.apply(op);
        }
        assert_matches_model(&vec, &model);
    }

    #[test]
    fn clone_matches_after_any_history(ops in arb_ops(20)) {
        let mut vec = TieredVec::new();
        for op in &ops {
            apply(&mut vec, op);
        }
        let copy = vec.clone();
        prop_assert_eq!(&copy, &vec);
        prop_assert_eq!(copy.block_count(), vec.block_count());
        prop_assert_eq!(copy.block_capacity(), vec.block_capacity());
        prop_assert_eq!(copy.spine_mode(), vec.spine_mode());
    }

    #[test]
    fn pop_never_frees_more_than_one_block_per_call(len in 0usize..6000, pops in 0usize..6000) {
        let mut vec: TieredVec<i32> = (0..len as i32).collect();
        vec.resize(len / 3);
        for _ in 0..pops {
            let before = vec.block_count();
            vec.pop();
            prop_assert!(before - vec.block_count() <= 1);
        }
    }
}

#[test]
fn model_and_container_agree_on_boundary_walk() {
    let mut vec = TieredVec::new();
    let mut model = FlatModel::new();
    let ops = [
        Op::PushMany(2048),
        Op::PopMany(1023),
        Op::PushMany(1023),
        Op::PopMany(2048),
        Op::PushMany(9000),
        Op::Resize(1),
        Op::PopMany(1),
    ];
    for op in &ops {
        apply(&mut vec, op);
        model.apply(op);
        assert_matches_model(&vec, &model);
    }
}
