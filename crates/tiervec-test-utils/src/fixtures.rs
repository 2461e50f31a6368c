//! Pre-built containers and instrumented element types.

use std::cell::Cell;
use std::rc::Rc;

use tiervec::{TieredConfig, TieredVec};

/// Container holding `0..len`.
pub fn filled(len: usize) -> TieredVec<i32> {
    (0..len as i32).collect()
}

/// Container holding `0..len` with a custom shrink policy.
pub fn filled_with_config(len: usize, config: TieredConfig) -> TieredVec<i32> {
    let mut vec = TieredVec::with_config(config);
    vec.extend(0..len as i32);
    vec
}

/// Container of owned strings `"0"`, `"1"`, …, for tests that need
/// non-`Copy` elements.
pub fn strings(len: usize) -> TieredVec<String> {
    (0..len).map(|i| i.to_string()).collect()
}

/// Element that counts how many tracked instances have been dropped.
///
/// `Tracked::default()` is untracked, so the default-constructed filler in
/// blocks does not disturb the count.
#[derive(Clone, Debug, Default)]
pub struct Tracked {
    pub id: u32,
    drops: Option<Rc<Cell<usize>>>,
}

impl Tracked {
    pub fn new(id: u32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            id,
            drops: Some(Rc::clone(drops)),
        }
    }

    pub fn is_tracked(&self) -> bool {
        self.drops.is_some()
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(drops) = &self.drops {
            drops.set(drops.get() + 1);
        }
    }
}
