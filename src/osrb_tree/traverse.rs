use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::{NodeRef, OSRBTree};
use crate::raw::{Handle, RawOSRBTree, Side};
use crate::{Color, Gender};

/// How a visited node hangs from its parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Branch {
    /// The node is the root and has no parent.
    Root,
    Left,
    Right,
}

impl From<Side> for Branch {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Branch::Left,
            Side::Right => Branch::Right,
        }
    }
}

/// One step of [`OSRBTree::traverse`]: a node, its depth below the root and the
/// branch it was reached through.
#[derive(Debug)]
pub struct Visit<'a, K, V> {
    node: NodeRef<'a, K, V>,
    depth: usize,
    branch: Branch,
}

impl<K, V> Clone for Visit<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Visit<'_, K, V> {}

impl<'a, K, V> Visit<'a, K, V> {
    #[must_use]
    pub fn node(&self) -> NodeRef<'a, K, V> {
        self.node
    }

    #[must_use]
    pub fn key(&self) -> &'a K {
        self.node.key()
    }

    #[must_use]
    pub fn value(&self) -> &'a V {
        self.node.value()
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        self.node.gender()
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.node.color()
    }

    /// Edges between the root and this node; the root is at depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn branch(&self) -> Branch {
        self.branch
    }
}

#[derive(Clone, Copy)]
struct Frame {
    handle: Handle,
    depth: usize,
    branch: Branch,
}

/// An in-order walk over an `OSRBTree` that reports where each node sits.
///
/// This `struct` is created by the [`traverse`] method on [`OSRBTree`].
///
/// [`traverse`]: OSRBTree::traverse
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Traverse<'a, K, V> {
    tree: &'a RawOSRBTree<K, V>,
    // Pending nodes whose left subtrees are already on the stack above them.
    stack: SmallVec<[Frame; 32]>,
}

impl<'a, K, V> Traverse<'a, K, V> {
    pub(crate) fn new(tree: &'a RawOSRBTree<K, V>) -> Self {
        let mut traverse = Self {
            tree,
            stack: SmallVec::new(),
        };
        if let Some(root) = tree.root() {
            traverse.descend_left(root, 0, Branch::Root);
        }
        traverse
    }

    fn descend_left(&mut self, mut handle: Handle, mut depth: usize, mut branch: Branch) {
        loop {
            self.stack.push(Frame { handle, depth, branch });
            match self.tree.node(handle).child(Side::Left) {
                Some(left) => {
                    handle = left;
                    depth += 1;
                    branch = Branch::Left;
                }
                None => return,
            }
        }
    }
}

impl<K, V> Clone for Traverse<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Traverse<'a, K, V> {
    type Item = Visit<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.node(frame.handle);

        if let Some(right) = node.child(Side::Right) {
            self.descend_left(right, frame.depth + 1, Side::Right.into());
        }

        Some(Visit {
            node: NodeRef::new(node),
            depth: frame.depth,
            branch: frame.branch,
        })
    }
}

impl<K, V> FusedIterator for Traverse<'_, K, V> {}

impl<K, V> OSRBTree<K, V> {
    /// Walks the tree in key order, yielding each node with its depth and the branch
    /// it hangs from. This is the shape [`pretty`](OSRBTree::pretty) prints.
    ///
    /// The walk is lazy and read-only; calling `traverse` again on an unchanged tree
    /// yields the same sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::osrb_tree::Branch;
    /// use osrb_tree::{Gender, OSRBTree};
    ///
    /// let tree = OSRBTree::from_iter([
    ///     ("a", Gender::Male, 1),
    ///     ("b", Gender::Female, 2),
    ///     ("c", Gender::Male, 3),
    /// ]);
    ///
    /// let shape: Vec<_> = tree.traverse().map(|v| (*v.key(), v.depth(), v.branch())).collect();
    /// assert_eq!(shape, [("a", 1, Branch::Left), ("b", 0, Branch::Root), ("c", 1, Branch::Right)]);
    /// ```
    pub fn traverse(&self) -> Traverse<'_, K, V> {
        Traverse::new(&self.raw)
    }
}
