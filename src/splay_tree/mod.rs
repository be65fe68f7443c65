//! Self-adjusting binary search tree with the additional property that recently accessed elements
//! are quick to access again.
//!
//! Every access restructures the tree with a top-down splay so that the accessed key, or the key
//! where the search ended, becomes the root. No balance information is stored in the nodes.

mod node;
mod set;
mod tree;

pub use self::set::{SplaySet, SplaySetIntoIter, SplaySetIter};
