//! Skill taxonomy: classification and aggregation.
//!
//! # Architecture
//!
//! 1. **Classifier** - maps each raw skill label to a fixed category
//! 2. **Aggregator** - groups labels into a root -> category -> skill tree
//!    weighted by endorsement counts
//! 3. **Directory** - holds the current snapshot and memoizes the tree

mod classifier;
mod directory;
mod tree;

pub use classifier::*;
pub use directory::*;
pub use tree::*;
