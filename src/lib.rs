//! An ordered set backed by a top-down splay tree.
//!
//! The tree stores no balance information. Instead, every access splays the accessed key (or the
//! neighbour where its search ended) to the root, which bounds the amortized cost of each
//! operation at `O(log n)` over any sequence of operations and keeps recently used keys cheap to
//! reach again.
//!
//! # Examples
//!
//! ```
//! use splay_set::SplaySet;
//!
//! let mut set = SplaySet::new();
//! assert!(set.insert(3));
//! assert!(set.insert(1));
//! assert!(!set.insert(3));
//!
//! assert_eq!(set.min(), Some(&1));
//! assert!(set.contains(&3));
//! assert_eq!(set.root(), Some(&3));
//! ```

pub mod splay_tree;

pub use crate::splay_tree::{SplaySet, SplaySetIntoIter, SplaySetIter};
