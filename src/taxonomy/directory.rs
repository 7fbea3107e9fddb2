//! Snapshot holder with a memoized taxonomy.

use std::sync::OnceLock;

use super::classifier::{SkillClassifier, TableClassifier};
use super::tree::{RootNode, TaxonomyBuilder};
use crate::model::{Employee, Snapshot};

/// Owns the current snapshot and lazily derives its taxonomy.
///
/// The tree is built on first access and reused until the snapshot is
/// replaced.
pub struct SkillDirectory {
    snapshot: Snapshot,
    classifier: Box<dyn SkillClassifier>,
    tree: OnceLock<RootNode>,
}

impl SkillDirectory {
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self::with_classifier(snapshot, Box::new(TableClassifier::default()))
    }

    #[must_use]
    pub fn with_classifier(snapshot: Snapshot, classifier: Box<dyn SkillClassifier>) -> Self {
        Self {
            snapshot,
            classifier,
            tree: OnceLock::new(),
        }
    }

    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn classifier(&self) -> &dyn SkillClassifier {
        self.classifier.as_ref()
    }

    /// The taxonomy for the current snapshot.
    pub fn tree(&self) -> &RootNode {
        self.tree.get_or_init(|| {
            TaxonomyBuilder::new(self.classifier.as_ref())
                .build(&self.snapshot.employees, &self.snapshot.endorsements)
        })
    }

    /// Swap in a new snapshot and drop the memoized tree.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.tree = OnceLock::new();
    }

    /// Employees listing `label`, resolved against the snapshot.
    #[must_use]
    pub fn holders(&self, label: &str) -> Vec<&Employee> {
        self.tree()
            .employees_with_skill(label)
            .into_iter()
            .filter_map(|id| self.snapshot.employee(id))
            .collect()
    }

    #[must_use]
    pub fn is_built(&self) -> bool {
        self.tree.get().is_some()
    }
}
