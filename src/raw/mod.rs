mod arena;
mod handle;
mod node;
mod raw_osrb_tree;
mod tally;

pub(crate) use handle::Handle;
pub(crate) use node::{Node, Side};
pub(crate) use raw_osrb_tree::RawOSRBTree;
