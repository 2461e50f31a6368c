//! Test utilities for tiervec development.
//!
//! Provides a [`FlatModel`] reference implementation (a plain `Vec` that
//! also predicts block and spine bookkeeping), an [`Op`] vocabulary with
//! proptest strategies, and helpers that check a [`TieredVec`] against the
//! model after every step.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use proptest::prelude::*;
use tiervec::layout::{blocks_for, spine_capacity_for, BLOCK_LEN, INLINE_SPINE};
use tiervec::{SpineMode, TieredConfig, TieredVec};

/// One structural operation applied to both the container and the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Push(i32),
    /// Push `n` consecutive values starting at the current length.
    PushMany(usize),
    Pop,
    /// Pop up to `n` elements.
    PopMany(usize),
    Resize(usize),
    Reserve(usize),
    Clear,
    Write { index: usize, value: i32 },
}

/// Flat-array reference for [`TieredVec<i32>`].
///
/// Elements live in a `Vec<i32>`; block count and spine capacity are
/// tracked with the same growth and shrink rules the container documents,
/// so tests can compare bookkeeping as well as contents.
#[derive(Clone, Debug, Default)]
pub struct FlatModel {
    values: Vec<i32>,
    block_count: usize,
    block_capacity: usize,
    config: TieredConfig,
}

impl FlatModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TieredConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn block_count(&self) -> usize {
        self.block_count
    }

    pub fn block_capacity(&self) -> usize {
        self.block_capacity
    }

    pub fn capacity(&self) -> usize {
        self.block_capacity * BLOCK_LEN
    }

    pub fn spine_mode(&self) -> SpineMode {
        match self.block_capacity {
            0 => SpineMode::Unallocated,
            c if c <= INLINE_SPINE => SpineMode::Inline,
            _ => SpineMode::Heap,
        }
    }

    fn reserve_blocks(&mut self, blocks: usize) {
        if blocks > self.block_capacity {
            self.block_capacity =
                spine_capacity_for(blocks).expect("model capacity within range");
        }
    }

    pub fn push(&mut self, value: i32) {
        if self.values.len() / BLOCK_LEN == self.block_count {
            self.reserve_blocks(self.block_count + 1);
            self.block_count += 1;
        }
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Option<i32> {
        let value = self.values.pop()?;
        let needed = blocks_for(self.values.len());
        if self.block_count > needed + self.config.shrink_slack {
            self.block_count -= 1;
        }
        Some(value)
    }

    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.values.len() {
            let needed = blocks_for(new_len);
            self.reserve_blocks(needed);
            self.block_count = self.block_count.max(needed);
        }
        self.values.resize(new_len, 0);
    }

    pub fn reserve(&mut self, capacity: usize) {
        self.reserve_blocks(blocks_for(capacity));
    }

    pub fn apply(&mut self, op: &Op) {
        match *op {
            Op::Push(value) => self.push(value),
            Op::PushMany(n) => {
                for _ in 0..n {
                    let next = self.values.len() as i32;
                    self.push(next);
                }
            }
            Op::Pop => {
                self.pop();
            }
            Op::PopMany(n) => {
                for _ in 0..n {
                    self.pop();
                }
            }
            Op::Resize(n) => self.resize(n),
            Op::Reserve(n) => self.reserve(n),
            Op::Clear => self.values.clear(),
            Op::Write { index, value } => {
                if let Some(slot) = self.values.get_mut(index) {
                    *slot = value;
                }
            }
        }
    }
}

/// Apply `op` to a container the same way [`FlatModel::apply`] does.
pub fn apply(vec: &mut TieredVec<i32>, op: &Op) {
    match *op {
        Op::Push(value) => vec.push(value),
        Op::PushMany(n) => {
            for _ in 0..n {
                let next = vec.len() as i32;
                vec.push(next);
            }
        }
        Op::Pop => {
            vec.pop();
        }
        Op::PopMany(n) => {
            for _ in 0..n {
                vec.pop();
            }
        }
        Op::Resize(n) => vec.resize(n),
        Op::Reserve(n) => vec.reserve(n),
        Op::Clear => vec.clear(),
        Op::Write { index, value } => {
            if let Some(slot) = vec.get_mut(index) {
                *slot = value;
            }
        }
    }
}

/// Assert that `vec` matches `model` in contents and bookkeeping.
pub fn assert_matches_model(vec: &TieredVec<i32>, model: &FlatModel) {
    assert_eq!(vec.len(), model.len(), "length");
    assert_eq!(vec.block_count(), model.block_count(), "block count");
    assert_eq!(vec.block_capacity(), model.block_capacity(), "block capacity");
    assert_eq!(vec.capacity(), model.capacity(), "capacity");
    assert_eq!(vec.spine_mode(), model.spine_mode(), "spine mode");
    for (index, expected) in model.values().iter().enumerate() {
        assert_eq!(vec[index], *expected, "element {index}");
    }
}

/// Assert the structural invariants that must hold between public calls.
pub fn assert_invariants<T>(vec: &TieredVec<T>) {
    assert!(vec.len() <= vec.block_count() * BLOCK_LEN, "len within blocks");
    assert!(
        vec.block_count() <= vec.block_capacity(),
        "blocks within spine capacity"
    );
    assert!(
        vec.block_count() >= blocks_for(vec.len()),
        "every live element has a block"
    );
    let expected_mode = match vec.block_capacity() {
        0 => SpineMode::Unallocated,
        c if c <= INLINE_SPINE => SpineMode::Inline,
        _ => SpineMode::Heap,
    };
    assert_eq!(vec.spine_mode(), expected_mode, "spine mode");
}

/// Strategy for a single [`Op`], weighted toward boundary-crossing traffic.
pub fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        3 => (0usize..2 * BLOCK_LEN).prop_map(Op::PushMany),
        3 => Just(Op::Pop),
        3 => (0usize..2 * BLOCK_LEN).prop_map(Op::PopMany),
        1 => (0usize..12 * BLOCK_LEN).prop_map(Op::Resize),
        1 => (0usize..20 * BLOCK_LEN).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
        2 => (0usize..12 * BLOCK_LEN, any::<i32>())
            .prop_map(|(index, value)| Op::Write { index, value }),
    ]
}

/// Strategy for a sequence of up to `max_len` operations.
pub fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(arb_op(), 0..max_len)
}

/// Strategy for shrink slack values worth exercising.
pub fn arb_config() -> impl Strategy<Value = TieredConfig> {
    (0usize..4).prop_map(|slack| TieredConfig::new().with_shrink_slack(slack))
}
