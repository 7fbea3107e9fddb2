//! Ranked search over employees and skill labels.
//!
//! Every employee is scored on name and title; every distinct skill label
//! is scored once. Candidates above the threshold are boosted by source
//! (name > title > skill), de-duplicated first-write-wins per entity,
//! sorted by descending score and capped.

use std::collections::HashSet;

use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use super::fuzzy::fuzzy_score;
use crate::config::SearchConfig;
use crate::model::{Employee, EmployeeId};

/// Kind of a search result, for display and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Employee,
    Skill,
}

impl ResultKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Skill => "skill",
        }
    }
}

/// One ranked match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchResult<'a> {
    Employee { employee: &'a Employee, score: f64 },
    Skill { label: &'a str, score: f64 },
}

impl<'a> SearchResult<'a> {
    #[must_use]
    pub const fn score(&self) -> f64 {
        match self {
            Self::Employee { score, .. } | Self::Skill { score, .. } => *score,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ResultKind {
        match self {
            Self::Employee { .. } => ResultKind::Employee,
            Self::Skill { .. } => ResultKind::Skill,
        }
    }

    /// Primary text shown for this result.
    #[must_use]
    pub fn display(&self) -> &'a str {
        match *self {
            Self::Employee { employee, .. } => &employee.name,
            Self::Skill { label, .. } => label,
        }
    }

    #[must_use]
    pub const fn employee(&self) -> Option<&'a Employee> {
        match *self {
            Self::Employee { employee, .. } => Some(employee),
            Self::Skill { .. } => None,
        }
    }
}

/// Search engine with tunable threshold, boosts and result cap.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Rank employees and skills against `query`.
    ///
    /// A blank query yields no results. Scoring uses the query as typed.
    #[must_use]
    pub fn search<'a>(&self, employees: &'a [Employee], query: &str) -> Vec<SearchResult<'a>> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let threshold = self.config.threshold;
        let mut candidates = Vec::new();

        for employee in employees {
            let name_score = fuzzy_score(&employee.name, query);
            if name_score > threshold {
                candidates.push(SearchResult::Employee {
                    employee,
                    score: name_score + self.config.name_boost,
                });
            }
            let title_score = fuzzy_score(&employee.title, query);
            if title_score > threshold {
                candidates.push(SearchResult::Employee {
                    employee,
                    score: title_score + self.config.title_boost,
                });
            }
        }

        for label in skill_pool(employees) {
            let score = fuzzy_score(label, query);
            if score > threshold {
                candidates.push(SearchResult::Skill { label, score });
            }
        }

        let scored = candidates.len();
        let mut results = dedup_first_seen(candidates);
        // Stable: equal scores keep scan order.
        results.sort_by(|a, b| b.score().total_cmp(&a.score()));
        results.truncate(self.config.max_results);

        debug!(
            query,
            candidates = scored,
            results = results.len(),
            "ranked search"
        );

        results
    }
}

/// Search with the default configuration.
#[must_use]
pub fn search<'a>(employees: &'a [Employee], query: &str) -> Vec<SearchResult<'a>> {
    SearchEngine::default().search(employees, query)
}

/// Distinct skill labels across all employees, in first-seen order.
#[must_use]
pub fn skill_pool(employees: &[Employee]) -> IndexSet<&str> {
    employees
        .iter()
        .flat_map(|e| e.skills.iter().map(String::as_str))
        .collect()
}

/// Keep the first candidate per employee id and per skill label.
fn dedup_first_seen<'a>(candidates: Vec<SearchResult<'a>>) -> Vec<SearchResult<'a>> {
    let mut seen_employees: HashSet<&'a EmployeeId> = HashSet::new();
    let mut seen_skills: HashSet<&'a str> = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| match *candidate {
            SearchResult::Employee { employee, .. } => seen_employees.insert(&employee.id),
            SearchResult::Skill { label, .. } => seen_skills.insert(label),
        })
        .collect()
}
