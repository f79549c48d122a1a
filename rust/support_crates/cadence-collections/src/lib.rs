//! Hand-rolled generic containers: a comparator-ordered binary tree, a fixed-capacity
//! chained hash map with its bucket list, and a FIFO queue.
//!
//! None of the containers balance or resize themselves. The tree takes its comparator
//! per operation, so the same tree can be reshaped under a different ordering by
//! copying it with [`OrderedTree::copy_with`].

pub mod bucket_list;
pub mod chained_map;
pub mod comparator;
pub mod ordered_tree;
pub mod queue;

pub use bucket_list::{BucketList, EntryHandle};
pub use chained_map::{ChainKey, ChainedMap};
pub use comparator::Comparator;
pub use ordered_tree::OrderedTree;
pub use queue::Queue;
