use core::fmt::{self, Write};

use super::{Branch, OSRBTree};

/// Prints an `OSRBTree` sideways, one node per line, in key order.
///
/// A node at depth `d` is indented by `d` tabs, marked `┌` if it is a left child or
/// `└` if it is a right child, followed by `d` dashes and
/// `(<color>)<key>-<value>-<gender>`.
///
/// This `struct` is created by the [`pretty`] method on [`OSRBTree`].
///
/// [`pretty`]: OSRBTree::pretty
#[must_use = "`Pretty` does nothing unless formatted"]
pub struct Pretty<'a, K, V> {
    tree: &'a OSRBTree<K, V>,
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Pretty<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for visit in self.tree.traverse() {
            let depth = visit.depth();

            for _ in 0..depth {
                f.write_char('\t')?;
            }
            match visit.branch() {
                Branch::Root => {}
                Branch::Left => f.write_char('┌')?,
                Branch::Right => f.write_char('└')?,
            }
            for _ in 0..depth {
                f.write_char('-')?;
            }

            writeln!(
                f,
                "({}){}-{}-{}",
                visit.color().code(),
                visit.key(),
                visit.value(),
                visit.gender().code()
            )?;
        }
        Ok(())
    }
}

impl<K, V> OSRBTree<K, V> {
    /// Returns a [`Display`](fmt::Display) adaptor that draws the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::{Gender, OSRBTree};
    ///
    /// let tree = OSRBTree::from_iter([
    ///     ("Mia", Gender::Female, 33),
    ///     ("Leo", Gender::Male, 27),
    /// ]);
    ///
    /// assert_eq!(tree.pretty().to_string(), "\t┌-(R)Leo-27-M\n(B)Mia-33-F\n");
    /// ```
    pub fn pretty(&self) -> Pretty<'_, K, V> {
        Pretty { tree: self }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::Gender;
    use alloc::string::ToString;

    #[test]
    fn empty_tree_renders_nothing() {
        let tree: OSRBTree<&str, u64> = OSRBTree::new();
        assert_eq!(tree.pretty().to_string(), "");
    }

    #[test]
    fn deeper_nodes_get_longer_prefixes() {
        let tree = OSRBTree::from_iter([
            ("b", Gender::Male, 2u64),
            ("a", Gender::Female, 1),
            ("d", Gender::Male, 4),
            ("c", Gender::Female, 3),
        ]);

        let expected = "\t┌-(B)a-1-F\n\
                        (B)b-2-M\n\
                        \t\t┌--(R)c-3-F\n\
                        \t└-(B)d-4-M\n";
        assert_eq!(tree.pretty().to_string(), expected);
    }
}
