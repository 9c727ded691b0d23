use core::ops::Index;

use super::{NodeRef, OSRBTree};
use crate::{Gender, Rank, RankOutOfRange};

impl<K, V> OSRBTree<K, V> {
    /// Returns the node at position `rank` among the nodes of `gender`, in key order.
    ///
    /// The rank is zero-based: `Rank(0)` is the first node of that gender. Nodes of
    /// the other gender are skipped entirely, so the result always has the requested
    /// gender.
    ///
    /// # Errors
    ///
    /// Returns [`RankOutOfRange`] if the tree holds no more than `rank` nodes of
    /// `gender`, which includes every query against an empty tree.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::{Gender, OSRBTree, Rank};
    ///
    /// let tree = OSRBTree::from_iter([
    ///     ("Zoe", Gender::Female, 22),
    ///     ("Max", Gender::Male, 45),
    ///     ("Ivy", Gender::Female, 37),
    /// ]);
    ///
    /// let second_woman = tree.find_with_rank(Gender::Female, Rank(1)).unwrap();
    /// assert_eq!(*second_woman.key(), "Zoe");
    ///
    /// let error = tree.find_with_rank(Gender::Male, Rank(1)).unwrap_err();
    /// assert_eq!(error.count, 1);
    /// ```
    pub fn find_with_rank(&self, gender: Gender, rank: Rank) -> Result<NodeRef<'_, K, V>, RankOutOfRange> {
        let handle = self.raw.find_with_rank(gender, rank)?;
        Ok(NodeRef::new(self.raw.node(handle)))
    }
}

/// Indexes into the tree by gender and rank, returning the node's value.
///
/// # Panics
///
/// Panics if the tree holds no more than `rank` nodes of `gender`.
///
/// # Examples
///
/// ```
/// use osrb_tree::{Gender, OSRBTree, Rank};
///
/// let mut tree = OSRBTree::new();
/// tree.insert("Ada", Gender::Female, 36);
/// tree.insert("Alan", Gender::Male, 41);
///
/// assert_eq!(tree[(Gender::Male, Rank(0))], 41);
/// ```
impl<K, V> Index<(Gender, Rank)> for OSRBTree<K, V> {
    type Output = V;

    fn index(&self, (gender, rank): (Gender, Rank)) -> &Self::Output {
        match self.find_with_rank(gender, rank) {
            Ok(node) => node.value(),
            Err(error) => panic!("rank out of bounds: {error}"),
        }
    }
}
