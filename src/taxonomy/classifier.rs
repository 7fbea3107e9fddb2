//! Skill classifier: maps a free-text skill label to a category bucket.
//!
//! Classification is a static table lookup. The table is an explicit
//! value ([`CategoryTable`]) handed to the classifier, so callers can swap
//! or extend it from configuration. Lookups are case-sensitive exact
//! matches unless the table was built with label normalization; anything
//! not listed lands in [`SkillCategory::Other`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::error::SkmError;

// =============================================================================
// CATEGORY ENUM
// =============================================================================

/// Fixed set of skill categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technology,
    Design,
    Analytics,
    Marketing,
    Management,
    Finance,
    /// Catch-all for labels missing from every membership list.
    Other,
}

impl SkillCategory {
    /// All categories, in table order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Technology,
            Self::Design,
            Self::Analytics,
            Self::Marketing,
            Self::Management,
            Self::Finance,
            Self::Other,
        ]
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Design => "design",
            Self::Analytics => "analytics",
            Self::Marketing => "marketing",
            Self::Management => "management",
            Self::Finance => "finance",
            Self::Other => "other",
        }
    }

    /// Display name used as the category node's name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Design => "Design",
            Self::Analytics => "Analytics",
            Self::Marketing => "Marketing",
            Self::Management => "Management",
            Self::Finance => "Finance",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillCategory {
    type Err = SkmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| SkmError::Config(format!("unknown skill category {s}")))
    }
}

// =============================================================================
// CLASSIFIER TRAIT
// =============================================================================

/// Maps a skill label to exactly one category.
///
/// Implementations are total: every label yields a category.
pub trait SkillClassifier: Send + Sync {
    fn classify(&self, label: &str) -> SkillCategory;

    /// Returns the name of this classifier for debugging.
    fn name(&self) -> &'static str;
}

// =============================================================================
// MEMBERSHIP TABLE
// =============================================================================

const TECHNOLOGY: &[&str] = &[
    "React",
    "TypeScript",
    "JavaScript",
    "Node.js",
    "Python",
    "Java",
    "Go",
    "Rust",
    "C#",
    "GraphQL",
    "SQL",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "DevOps",
    "Vue.js",
    "Angular",
    "Swift",
    "Kotlin",
];

const DESIGN: &[&str] = &[
    "Figma",
    "Sketch",
    "Adobe XD",
    "UI Design",
    "UX Design",
    "UX Research",
    "User Research",
    "Prototyping",
    "Design Systems",
    "Wireframing",
    "Illustrator",
    "Photoshop",
];

const ANALYTICS: &[&str] = &[
    "Data Analysis",
    "Data Science",
    "Machine Learning",
    "Statistics",
    "Tableau",
    "Power BI",
    "Data Visualization",
    "R",
    "Excel",
    "A/B Testing",
];

const MARKETING: &[&str] = &[
    "SEO",
    "Content Marketing",
    "Social Media",
    "Email Marketing",
    "Google Ads",
    "Copywriting",
    "Brand Strategy",
    "Growth Marketing",
    "Market Research",
];

const MANAGEMENT: &[&str] = &[
    "Project Management",
    "Product Management",
    "Agile",
    "Scrum",
    "Leadership",
    "Team Leadership",
    "Stakeholder Management",
    "Strategic Planning",
    "People Management",
];

const FINANCE: &[&str] = &[
    "Financial Modeling",
    "Financial Analysis",
    "Accounting",
    "Budgeting",
    "Forecasting",
    "Risk Management",
    "Investment Analysis",
    "Payroll",
];

/// Category membership lists, in lookup priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTable {
    memberships: IndexMap<SkillCategory, Vec<String>>,
    normalize_labels: bool,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CategoryTable {
    /// Empty table: everything classifies as `Other`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            memberships: IndexMap::new(),
            normalize_labels: false,
        }
    }

    /// The built-in membership lists.
    #[must_use]
    pub fn builtin() -> Self {
        let lists: [(SkillCategory, &[&str]); 6] = [
            (SkillCategory::Technology, TECHNOLOGY),
            (SkillCategory::Design, DESIGN),
            (SkillCategory::Analytics, ANALYTICS),
            (SkillCategory::Marketing, MARKETING),
            (SkillCategory::Management, MANAGEMENT),
            (SkillCategory::Finance, FINANCE),
        ];
        let memberships: IndexMap<SkillCategory, Vec<String>> = lists
            .into_iter()
            .map(|(category, labels)| {
                (category, labels.iter().map(|s| (*s).to_string()).collect())
            })
            .collect();
        Self {
            memberships,
            normalize_labels: false,
        }
    }

    /// Built-in lists with configured entries merged in front.
    #[must_use]
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let mut table = Self::builtin().with_normalization(config.normalize_labels);
        for (category, labels) in &config.categories {
            if *category == SkillCategory::Other {
                tracing::debug!("ignoring configured labels for the catch-all category");
                continue;
            }
            table.extend(*category, labels.iter().cloned());
        }
        table
    }

    #[must_use]
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_labels = normalize;
        self
    }

    /// Put `labels` ahead of the existing entries for `category`.
    pub fn extend<I>(&mut self, category: SkillCategory, labels: I)
    where
        I: IntoIterator<Item = String>,
    {
        let entry = self.memberships.entry(category).or_default();
        let mut merged: Vec<String> = labels.into_iter().collect();
        for existing in entry.drain(..) {
            if !merged.contains(&existing) {
                merged.push(existing);
            }
        }
        *entry = merged;
    }

    #[must_use]
    pub const fn normalize_labels(&self) -> bool {
        self.normalize_labels
    }

    /// Labels listed for `category` (empty for `Other`).
    #[must_use]
    pub fn labels(&self, category: SkillCategory) -> &[String] {
        self.memberships
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, &[String])> {
        self.memberships
            .iter()
            .map(|(category, labels)| (*category, labels.as_slice()))
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

// =============================================================================
// TABLE CLASSIFIER
// =============================================================================

/// Classifier backed by a [`CategoryTable`].
#[derive(Debug, Clone)]
pub struct TableClassifier {
    table: CategoryTable,
    index: HashMap<String, SkillCategory>,
}

impl Default for TableClassifier {
    fn default() -> Self {
        Self::new(CategoryTable::builtin())
    }
}

impl TableClassifier {
    #[must_use]
    pub fn new(table: CategoryTable) -> Self {
        let mut index = HashMap::new();
        for (category, labels) in table.iter() {
            for label in labels {
                let key = if table.normalize_labels {
                    normalize(label)
                } else {
                    label.clone()
                };
                // First category in table order wins.
                index.entry(key).or_insert(category);
            }
        }
        Self { table, index }
    }

    #[must_use]
    pub const fn table(&self) -> &CategoryTable {
        &self.table
    }
}

impl SkillClassifier for TableClassifier {
    fn classify(&self, label: &str) -> SkillCategory {
        let found = if self.table.normalize_labels {
            self.index.get(&normalize(label))
        } else {
            self.index.get(label)
        };
        found.copied().unwrap_or(SkillCategory::Other)
    }

    fn name(&self) -> &'static str {
        "TableClassifier"
    }
}

// =============================================================================
// TESTS
// =============================================================================
