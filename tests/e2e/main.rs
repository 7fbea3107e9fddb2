//! End-to-end suite: library workflows over realistic snapshots.

#[path = "../common/mod.rs"]
mod common;
mod config_fixtures;
mod scenarios;
mod tree_snapshot;
