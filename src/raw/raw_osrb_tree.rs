use log::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use super::tally::Tally;
use crate::{Color, Gender, Rank, RankOutOfRange};

/// The red-black tree backing `OSRBTree`.
#[derive(Clone)]
pub(crate) struct RawOSRBTree<K, V> {
    /// Arena storing all tree nodes. Nodes are never freed individually.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<K, V> RawOSRBTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of nodes in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree contains no nodes.
    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Drops every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Returns how many nodes of `gender` the tree holds.
    pub(crate) fn count(&self, gender: Gender) -> usize {
        self.subtree_tally(self.root).get(gender)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        self.height_below(self.root)
    }

    fn height_below(&self, handle: Option<Handle>) -> usize {
        handle.map_or(0, |handle| {
            let node = self.nodes.get(handle);
            1 + self.height_below(node.child(Side::Left)).max(self.height_below(node.child(Side::Right)))
        })
    }

    #[inline]
    fn subtree_tally(&self, handle: Option<Handle>) -> Tally {
        handle.map_or(Tally::ZERO, |handle| self.nodes.get(handle).tally())
    }

    /// Which side of `parent` the node `child` hangs from.
    #[inline]
    fn side_of(&self, child: Handle, parent: Handle) -> Side {
        if self.nodes.get(parent).child(Side::Left) == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Recomputes a node's tally from its children.
    fn recount(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let tally = Tally::of(node.gender())
            + self.subtree_tally(node.child(Side::Left))
            + self.subtree_tally(node.child(Side::Right));
        self.nodes.get_mut(handle).set_tally(tally);
    }

    /// Rotates the subtree at `pivot` so that the pivot moves down to its `direction` side
    /// and its child on the opposite side rises into its place.
    ///
    /// Only the pivot, the rising child, the subtree that moves between them and the
    /// parent's link are touched. Does nothing if there is no child to rise.
    fn rotate(&mut self, pivot: Handle, direction: Side) {
        let rising_side = direction.opposite();
        let Some(riser) = self.nodes.get(pivot).child(rising_side) else {
            return;
        };
        let parent = self.nodes.get(pivot).parent();
        let inner = self.nodes.get(riser).child(direction);

        // The riser's inner subtree crosses over to the pivot.
        self.nodes.get_mut(pivot).set_child(rising_side, inner);
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).set_parent(Some(pivot));
        }

        match parent {
            Some(parent) => {
                let side = self.side_of(pivot, parent);
                self.nodes.get_mut(parent).set_child(side, Some(riser));
            }
            None => self.root = Some(riser),
        }
        self.nodes.get_mut(riser).set_parent(parent);

        self.nodes.get_mut(riser).set_child(direction, Some(pivot));
        self.nodes.get_mut(pivot).set_parent(Some(riser));

        // The riser now spans exactly the nodes the pivot used to.
        let tally = self.nodes.get(pivot).tally();
        self.nodes.get_mut(riser).set_tally(tally);
        self.recount(pivot);
    }

    /// Finds the `rank`-th node of `gender` in key order (zero-based).
    pub(crate) fn find_with_rank(&self, gender: Gender, rank: Rank) -> Result<Handle, RankOutOfRange> {
        let count = self.count(gender);
        if rank.0 >= count {
            return Err(RankOutOfRange { gender, rank, count });
        }

        let mut remaining = rank.0;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let before = self.subtree_tally(node.child(Side::Left)).get(gender);

            if remaining < before {
                current = node.child(Side::Left);
                continue;
            }

            remaining -= before;
            if node.gender() == gender {
                if remaining == 0 {
                    return Ok(handle);
                }
                remaining -= 1;
            }
            current = node.child(Side::Right);
        }

        panic!(
            "find_with_rank: tally invariant violated - {gender} rank {} not found (count: {count})",
            rank.0
        );
    }
}

impl<K: Ord, V> RawOSRBTree<K, V> {
    /// Inserts a node and rebalances. Equal keys go to the right, so they keep insertion order.
    pub(crate) fn insert(&mut self, key: K, gender: Gender, value: V) -> Handle {
        let handle = self.nodes.alloc(Node::new(key, gender, value, Color::Red));

        let Some(mut current) = self.root else {
            self.nodes.get_mut(handle).set_color(Color::Black);
            self.root = Some(handle);
            return handle;
        };

        // Every node on the way down gains one member of `gender`.
        let side = loop {
            let side = if self.nodes.get(handle).key() < self.nodes.get(current).key() {
                Side::Left
            } else {
                Side::Right
            };
            let node = self.nodes.get_mut(current);
            node.tally_mut().increment(gender);
            match node.child(side) {
                Some(child) => current = child,
                None => break side,
            }
        };

        self.nodes.get_mut(current).set_child(side, Some(handle));
        self.nodes.get_mut(handle).set_parent(Some(current));
        self.fix_after_insert(handle);
        handle
    }

    fn fix_after_insert(&mut self, mut current: Handle) {
        while let Some(parent) = self.nodes.get(current).parent()
            && self.nodes.get(parent).is_red()
        {
            // The root is black, so a red parent always has a parent of its own.
            let Some(grandparent) = self.nodes.get(parent).parent() else {
                break;
            };
            let side = self.side_of(parent, grandparent);
            let uncle = self.nodes.get(grandparent).child(side.opposite());

            if let Some(uncle) = uncle
                && self.nodes.get(uncle).is_red()
            {
                trace!("insert fixup: red uncle, recoloring below {grandparent:?}");
                self.nodes.get_mut(parent).set_color(Color::Black);
                self.nodes.get_mut(uncle).set_color(Color::Black);
                self.nodes.get_mut(grandparent).set_color(Color::Red);
                current = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.side_of(current, parent) != side {
                trace!("insert fixup: inner child, rotating {parent:?} {side:?}");
                self.rotate(parent, side);
                core::mem::swap(&mut current, &mut parent);
            }

            trace!("insert fixup: outer child, rotating {grandparent:?} {:?}", side.opposite());
            self.nodes.get_mut(parent).set_color(Color::Black);
            self.nodes.get_mut(grandparent).set_color(Color::Red);
            self.rotate(grandparent, side.opposite());
        }

        if let Some(root) = self.root {
            self.nodes.get_mut(root).set_color(Color::Black);
        }
    }
}
