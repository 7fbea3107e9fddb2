//! skillmap - skill taxonomy aggregation and ranked fuzzy search.
//!
//! The library consumes a snapshot of employees (id, name, title, skill
//! labels) plus skill endorsement events and derives two things from it:
//!
//! - a three-level taxonomy (root, category, skill) weighted by
//!   endorsement counts ([`taxonomy`])
//! - a ranked, de-duplicated list of employee and skill matches for a
//!   free-text query, with a keyboard navigation layer on top ([`search`])
//!
//! Both derivations are pure functions over in-memory snapshots.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod search;
pub mod taxonomy;
pub mod test_utils;

pub use error::{Result, SkmError};
pub use model::{Employee, EmployeeId, Endorsement, Snapshot};
pub use search::{SearchEngine, SearchResult, fuzzy_score};
pub use taxonomy::{
    CategoryTable, RootNode, SkillCategory, SkillClassifier, TableClassifier, build_taxonomy,
};
