//! Container configuration parameters.

/// Configuration for a [`TieredVec`](crate::TieredVec).
///
/// Block length and inline spine length are fixed by the layout; only the
/// shrink policy is tunable. Copied into the container at construction and
/// preserved across [`take`](crate::TieredVec::take) and clones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TieredConfig {
    /// Number of allocated-but-unused trailing blocks `pop` keeps around.
    ///
    /// Default: 1. A block is released only when the container holds more
    /// than `needed + shrink_slack` blocks, where `needed` is the number of
    /// blocks the remaining elements occupy. With the default, push/pop
    /// traffic straddling a block boundary never alternates between
    /// allocating and freeing. `0` releases a block as soon as it empties.
    pub shrink_slack: usize,
}

impl TieredConfig {
    /// Default number of spare trailing blocks retained on `pop`.
    pub const DEFAULT_SHRINK_SLACK: usize = 1;

    /// Create a config with default values.
    pub const fn new() -> Self {
        Self {
            shrink_slack: Self::DEFAULT_SHRINK_SLACK,
        }
    }

    /// Return a copy of this config with a different shrink slack.
    pub const fn with_shrink_slack(mut self, shrink_slack: usize) -> Self {
        self.shrink_slack = shrink_slack;
        self
    }
}

impl Default for TieredConfig {
    fn default() -> Self {
        Self::new()
    }
}
