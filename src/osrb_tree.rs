use core::fmt;
use core::iter::FusedIterator;

use crate::raw::{Node, RawOSRBTree};
use crate::{Color, Gender};

mod capacity;
mod order_statistic;
mod render;
mod traverse;

pub use crate::Rank;
pub use render::Pretty;
pub use traverse::{Branch, Traverse, Visit};

/// An ordered collection of people based on a [red-black tree], with O(log n)
/// rank selection per [`Gender`].
///
/// Every node carries a key (a name), a gender and a payload (an age). Nodes are
/// kept in key order; every subtree also counts how many men and women it
/// holds, which is what lets [`find_with_rank`] answer "who is the k-th woman
/// by name?" without walking the whole tree.
///
/// Keys need not be unique. An equal key is always placed after the ones
/// already present, so iteration lists duplicates in insertion order. There is
/// no removal: the tree only grows until it is [cleared] or dropped.
///
/// # Examples
///
/// ```
/// use osrb_tree::{Gender, OSRBTree, Rank};
///
/// let mut census = OSRBTree::new();
/// census.insert("Alice", Gender::Male, 30);
/// census.insert("Bob", Gender::Female, 25);
/// census.insert("Carol", Gender::Male, 40);
///
/// assert_eq!(census.len(), 3);
/// assert_eq!(census.count(Gender::Male), 2);
///
/// let second_man = census.find_with_rank(Gender::Male, Rank(1)).unwrap();
/// assert_eq!(*second_man.key(), "Carol");
/// assert_eq!(*second_man.value(), 40);
///
/// assert!(census.find_with_rank(Gender::Female, Rank(1)).is_err());
///
/// let names: Vec<_> = census.iter().map(|node| *node.key()).collect();
/// assert_eq!(names, ["Alice", "Bob", "Carol"]);
/// ```
///
/// [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
/// [`find_with_rank`]: OSRBTree::find_with_rank
/// [cleared]: OSRBTree::clear
#[derive(Clone)]
pub struct OSRBTree<K, V> {
    raw: RawOSRBTree<K, V>,
}

/// A shared view of one node of an [`OSRBTree`].
#[derive(Debug)]
pub struct NodeRef<'a, K, V> {
    key: &'a K,
    value: &'a V,
    gender: Gender,
    color: Color,
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) fn new(node: &'a Node<K, V>) -> Self {
        Self {
            key: node.key(),
            value: node.value(),
            gender: node.gender(),
            color: node.color(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &'a K {
        self.key
    }

    #[must_use]
    pub fn value(&self) -> &'a V {
        self.value
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// The node's current red-black color. It changes as later insertions rebalance the tree.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// An iterator over the nodes of an `OSRBTree`, in key order.
///
/// This `struct` is created by the [`iter`] method on [`OSRBTree`].
///
/// [`iter`]: OSRBTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: Traverse<'a, K, V>,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = NodeRef<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.inner.next()?;
        self.remaining -= 1;
        Some(visit.node())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> OSRBTree<K, V> {
    /// Makes a new, empty `OSRBTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTree;
    ///
    /// let tree: OSRBTree<String, u64> = OSRBTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        OSRBTree { raw: RawOSRBTree::new() }
    }

    /// Returns the number of nodes in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns how many nodes of `gender` the tree holds.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::{Gender, OSRBTree};
    ///
    /// let tree = OSRBTree::from_iter([
    ///     ("Ann", Gender::Female, 28),
    ///     ("Ben", Gender::Male, 35),
    ///     ("Cleo", Gender::Female, 41),
    /// ]);
    /// assert_eq!(tree.count(Gender::Female), 2);
    /// assert_eq!(tree.count(Gender::Male), 1);
    /// ```
    #[must_use]
    pub fn count(&self, gender: Gender) -> usize {
        self.raw.count(gender)
    }

    /// Returns the number of nodes on the longest path from the root down to a leaf,
    /// or 0 for an empty tree. Never more than `2 * log2(len + 1)`.
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Removes every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::{Gender, OSRBTree};
    ///
    /// let mut tree = OSRBTree::new();
    /// tree.insert(1, Gender::Male, ());
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.count(Gender::Male), 0);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Gets an iterator over the nodes of the tree, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::{Gender, OSRBTree};
    ///
    /// let mut tree = OSRBTree::new();
    /// tree.insert("b", Gender::Female, 2);
    /// tree.insert("a", Gender::Male, 1);
    ///
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.next().map(|node| *node.key()), Some("a"));
    /// assert_eq!(iter.len(), 1);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.traverse(),
            remaining: self.len(),
        }
    }
}

impl<K: Ord, V> OSRBTree<K, V> {
    /// Inserts a node, then restores the red-black invariants.
    ///
    /// Never fails and never replaces an existing node: a key equal to one already
    /// present is placed after it.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::{Gender, OSRBTree};
    ///
    /// let mut tree = OSRBTree::new();
    /// tree.insert("Sam", Gender::Male, 19);
    /// tree.insert("Sam", Gender::Female, 23);
    ///
    /// let ages: Vec<_> = tree.iter().map(|node| *node.value()).collect();
    /// assert_eq!(ages, [19, 23]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds `u32::MAX` nodes.
    pub fn insert(&mut self, key: K, gender: Gender, value: V) {
        self.raw.insert(key, gender, value);
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OSRBTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K, V> Default for OSRBTree<K, V> {
    fn default() -> Self {
        OSRBTree::new()
    }
}

impl<K: Ord, V> FromIterator<(K, Gender, V)> for OSRBTree<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, Gender, V)>>(iter: T) -> Self {
        let mut tree = OSRBTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, Gender, V)> for OSRBTree<K, V> {
    fn extend<T: IntoIterator<Item = (K, Gender, V)>>(&mut self, iter: T) {
        for (key, gender, value) in iter {
            self.insert(key, gender, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OSRBTree<K, V> {
    type Item = NodeRef<'a, K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
