/// The red-black color of a node.
///
/// Exposed through [`NodeRef::color`](crate::osrb_tree::NodeRef::color) so callers can
/// render or inspect the balancing state; it carries no meaning for ordering.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// `'R'` or `'B'`, as printed by [`OSRBTree::pretty`](crate::OSRBTree::pretty).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}
