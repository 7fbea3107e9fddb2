//! Taxonomy aggregation: employees + endorsements -> root/category/skill tree.
//!
//! The tree is rebuilt from scratch for every snapshot. Node identity is
//! positional within one build (category name, skill label), never a
//! persistent object.
//!
//! Employee sets are unions keyed by employee id, so an employee holding
//! several skills in one category is counted once at the category.
//! Endorsement counts are sums, because endorsements are events.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::classifier::{SkillCategory, SkillClassifier, TableClassifier};
use crate::model::{Employee, EmployeeId, Endorsement};

/// Name of the single root node.
pub const ROOT_NAME: &str = "All Skills";

/// Depth of a node in the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeLevel {
    Root = 0,
    Category = 1,
    Skill = 2,
}

impl NodeLevel {
    #[must_use]
    pub const fn depth(self) -> usize {
        self as usize
    }
}

/// Leaf node: one distinct skill label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillNode {
    /// Exact label as supplied by employee profiles; also the node id.
    pub label: String,
    pub category: SkillCategory,
    pub employees: IndexSet<EmployeeId>,
    pub endorsement_count: u64,
}

/// One category bucket and its skills, heaviest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryNode {
    pub category: SkillCategory,
    pub name: String,
    pub employees: IndexSet<EmployeeId>,
    pub endorsement_count: u64,
    pub children: Vec<SkillNode>,
}

impl CategoryNode {
    /// A bucket with no skills, for categories nothing classified into.
    #[must_use]
    pub fn empty(category: SkillCategory) -> Self {
        Self {
            category,
            name: category.label().to_string(),
            employees: IndexSet::new(),
            endorsement_count: 0,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Root of the taxonomy.
///
/// `employees` is the full input list (employees without skills included)
/// and `endorsement_count` is the number of events supplied, including
/// events for skills nobody currently lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootNode {
    pub name: String,
    pub employees: Vec<EmployeeId>,
    pub endorsement_count: u64,
    pub children: Vec<CategoryNode>,
}

impl RootNode {
    #[must_use]
    pub fn category(&self, category: SkillCategory) -> Option<&CategoryNode> {
        self.children.iter().find(|c| c.category == category)
    }

    /// Find a skill node by exact label.
    #[must_use]
    pub fn skill(&self, label: &str) -> Option<&SkillNode> {
        self.children
            .iter()
            .flat_map(|c| c.children.iter())
            .find(|s| s.label == label)
    }

    /// Ids of employees listing `label`, in first-seen order.
    #[must_use]
    pub fn employees_with_skill(&self, label: &str) -> Vec<&EmployeeId> {
        self.skill(label)
            .map(|s| s.employees.iter().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn skill_count(&self) -> usize {
        self.children.iter().map(|c| c.children.len()).sum()
    }

    /// Endorsements counted at the root but attached to no skill node.
    #[must_use]
    pub fn orphaned_endorsements(&self) -> u64 {
        let attached: u64 = self.children.iter().map(|c| c.endorsement_count).sum();
        self.endorsement_count.saturating_sub(attached)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// All nodes in pre-order: root, then each category followed by its skills.
    #[must_use]
    pub fn walk(&self) -> Vec<TaxonomyNode<'_>> {
        let mut nodes = vec![TaxonomyNode::Root(self)];
        for category in &self.children {
            nodes.push(TaxonomyNode::Category(category));
            nodes.extend(category.children.iter().map(TaxonomyNode::Skill));
        }
        nodes
    }
}

/// Uniform view over the three node levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaxonomyNode<'a> {
    Root(&'a RootNode),
    Category(&'a CategoryNode),
    Skill(&'a SkillNode),
}

impl<'a> TaxonomyNode<'a> {
    /// Stable identifier within one build.
    #[must_use]
    pub fn id(&self) -> &'a str {
        match *self {
            Self::Root(root) => &root.name,
            Self::Category(category) => category.category.as_str(),
            Self::Skill(skill) => &skill.label,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        match *self {
            Self::Root(root) => &root.name,
            Self::Category(category) => &category.name,
            Self::Skill(skill) => &skill.label,
        }
    }

    #[must_use]
    pub const fn level(&self) -> NodeLevel {
        match *self {
            Self::Root(_) => NodeLevel::Root,
            Self::Category(_) => NodeLevel::Category,
            Self::Skill(_) => NodeLevel::Skill,
        }
    }

    /// Category tag; the root spans all categories and has none.
    #[must_use]
    pub const fn category(&self) -> Option<SkillCategory> {
        match *self {
            Self::Root(_) => None,
            Self::Category(category) => Some(category.category),
            Self::Skill(skill) => Some(skill.category),
        }
    }

    #[must_use]
    pub fn employees(&self) -> Vec<&'a EmployeeId> {
        match *self {
            Self::Root(root) => root.employees.iter().collect(),
            Self::Category(category) => category.employees.iter().collect(),
            Self::Skill(skill) => skill.employees.iter().collect(),
        }
    }

    #[must_use]
    pub fn employee_count(&self) -> usize {
        match *self {
            Self::Root(root) => root.employees.len(),
            Self::Category(category) => category.employees.len(),
            Self::Skill(skill) => skill.employees.len(),
        }
    }

    #[must_use]
    pub const fn endorsement_count(&self) -> u64 {
        match *self {
            Self::Root(root) => root.endorsement_count,
            Self::Category(category) => category.endorsement_count,
            Self::Skill(skill) => skill.endorsement_count,
        }
    }

    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        match *self {
            Self::Root(root) => root.children.iter().map(TaxonomyNode::Category).collect(),
            Self::Category(category) => {
                category.children.iter().map(TaxonomyNode::Skill).collect()
            }
            Self::Skill(_) => Vec::new(),
        }
    }
}

struct SkillAccumulator {
    category: SkillCategory,
    employees: IndexSet<EmployeeId>,
    endorsements: u64,
}

/// Builds a [`RootNode`] from a snapshot using a classifier.
pub struct TaxonomyBuilder<'c> {
    classifier: &'c dyn SkillClassifier,
    root_name: String,
}

impl<'c> TaxonomyBuilder<'c> {
    pub fn new(classifier: &'c dyn SkillClassifier) -> Self {
        Self {
            classifier,
            root_name: ROOT_NAME.to_string(),
        }
    }

    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    #[must_use]
    pub fn build(&self, employees: &[Employee], endorsements: &[Endorsement]) -> RootNode {
        // Accumulators keyed by exact label, in first-seen order.
        let mut skills: IndexMap<&str, SkillAccumulator> = IndexMap::new();
        for employee in employees {
            for label in &employee.skills {
                let acc = skills
                    .entry(label.as_str())
                    .or_insert_with(|| SkillAccumulator {
                        category: self.classifier.classify(label),
                        employees: IndexSet::new(),
                        endorsements: 0,
                    });
                acc.employees.insert(employee.id.clone());
            }
        }

        let mut orphaned = 0usize;
        for endorsement in endorsements {
            if let Some(acc) = skills.get_mut(endorsement.skill.as_str()) {
                acc.endorsements += 1;
            } else {
                orphaned += 1;
                trace!(skill = %endorsement.skill, "endorsement for unlisted skill counted at root only");
            }
        }

        let mut grouped: IndexMap<SkillCategory, Vec<SkillNode>> = IndexMap::new();
        for (label, acc) in skills {
            grouped.entry(acc.category).or_default().push(SkillNode {
                label: label.to_string(),
                category: acc.category,
                employees: acc.employees,
                endorsement_count: acc.endorsements,
            });
        }

        let mut categories: Vec<CategoryNode> = grouped
            .into_iter()
            .map(|(category, mut children)| {
                // Stable: ties keep first-seen order.
                children.sort_by(|a, b| b.endorsement_count.cmp(&a.endorsement_count));
                let mut members = IndexSet::new();
                for child in &children {
                    members.extend(child.employees.iter().cloned());
                }
                CategoryNode {
                    category,
                    name: category.label().to_string(),
                    employees: members,
                    endorsement_count: children.iter().map(|c| c.endorsement_count).sum(),
                    children,
                }
            })
            .collect();
        categories.sort_by(|a, b| b.endorsement_count.cmp(&a.endorsement_count));

        let root = RootNode {
            name: self.root_name.clone(),
            employees: employees.iter().map(|e| e.id.clone()).collect(),
            endorsement_count: endorsements.len() as u64,
            children: categories,
        };

        debug!(
            classifier = self.classifier.name(),
            employees = root.employees.len(),
            categories = root.children.len(),
            skills = root.skill_count(),
            endorsements = root.endorsement_count,
            orphaned,
            "built skill taxonomy"
        );

        root
    }
}

/// Build a taxonomy with the built-in category table.
#[must_use]
pub fn build_taxonomy(employees: &[Employee], endorsements: &[Endorsement]) -> RootNode {
    let classifier = TableClassifier::default();
    TaxonomyBuilder::new(&classifier).build(employees, endorsements)
}
