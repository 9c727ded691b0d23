/// A zero-based rank among the nodes of one gender, in ascending key order.
///
/// `Rank(0)` is the first person of that gender; "the 3rd woman" is
/// `Rank(2)`.
///
/// # Examples
///
/// ```
/// use osrb_tree::{Gender, OSRBTree, Rank};
///
/// let mut tree = OSRBTree::new();
/// tree.insert("Dana", Gender::Female, 31);
/// tree.insert("Ann", Gender::Female, 28);
///
/// assert_eq!(tree[(Gender::Female, Rank(0))], 28);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
