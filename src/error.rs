use thiserror::Error;

use crate::{Gender, Rank};

/// Returned by [`OSRBTree::find_with_rank`](crate::OSRBTree::find_with_rank) when the
/// tree holds no more than `rank` nodes of the requested gender.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("no {gender} node at rank {} (the tree holds {count})", .rank.0)]
pub struct RankOutOfRange {
    /// The gender that was queried.
    pub gender: Gender,
    /// The zero-based rank that was requested.
    pub rank: Rank,
    /// How many nodes of `gender` the tree holds.
    pub count: usize,
}
