//! A red-black order-statistic tree for Rust, with rank selection per gender.
//!
//! This crate provides [`OSRBTree`], a balanced binary search tree of people
//! ordered by name. Every node also records a [`Gender`], and every subtree keeps
//! a count of the men and women it contains, which makes "who is the k-th woman
//! in alphabetical order?" an O(log n) query:
//!
//! - [`insert`](OSRBTree::insert) - Add a node and rebalance, O(log n)
//! - [`find_with_rank`](OSRBTree::find_with_rank) - The k-th node of one gender, O(log n)
//! - [`traverse`](OSRBTree::traverse) - In-order walk with depth and branch, for display
//! - Indexing by gender and [`Rank`] - e.g., `tree[(Gender::Female, Rank(0))]`
//!
//! # Example
//!
//! ```
//! use osrb_tree::{Gender, OSRBTree, Rank};
//!
//! let mut census = OSRBTree::new();
//! census.insert("Alice", Gender::Male, 30);
//! census.insert("Bob", Gender::Female, 25);
//! census.insert("Carol", Gender::Male, 40);
//!
//! // Ranks are zero-based and counted within one gender.
//! let first_man = census.find_with_rank(Gender::Male, Rank(0)).unwrap();
//! assert_eq!(*first_man.key(), "Alice");
//! assert_eq!(census[(Gender::Male, Rank(1))], 40);
//!
//! // Asking past the end is an error, not a panic.
//! assert!(census.find_with_rank(Gender::Female, Rank(1)).is_err());
//! ```
//!
//! # Implementation
//!
//! Nodes live in an arena and link to each other by index, so rotations only
//! rewrite a handful of indices. The per-gender counts are maintained on the way
//! down during insertion and recomputed locally at each rotation; nothing ever
//! recounts the whole tree.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod color;
mod error;
mod gender;
mod order_statistic;
mod raw;

pub mod osrb_tree;
pub mod record;

pub use color::Color;
pub use error::RankOutOfRange;
pub use gender::Gender;
pub use order_statistic::Rank;
pub use osrb_tree::OSRBTree;
