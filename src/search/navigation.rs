//! Keyboard navigation layered over ranked search results.
//!
//! The search box owns the query text, the current results and the
//! highlighted index. It is open whenever the trimmed query is non-empty
//! and there is at least one result. Down/Up move the highlight within
//! `[none, len - 1]`, clamping at both ends. Enter commits the highlighted
//! result, else the first result, else (when the handler accepts skills)
//! the query text as an ad-hoc skill. Escape or any commit closes the box
//! and clears the query.

use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use super::engine::{SearchEngine, SearchResult};
use crate::error::SkmError;
use crate::model::Employee;

/// Keys the search box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
}

impl FromStr for NavKey {
    type Err = SkmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "down" => Ok(Self::Down),
            "up" => Ok(Self::Up),
            "enter" | "return" => Ok(Self::Enter),
            "esc" | "escape" => Ok(Self::Escape),
            other => Err(SkmError::InvalidKey(format!(
                "{other} (expected down|up|enter|esc)"
            ))),
        }
    }
}

/// Parse a comma-separated key script such as `down,down,enter`.
pub fn parse_key_script(script: &str) -> crate::error::Result<Vec<NavKey>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// Visible state of the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NavState {
    Closed,
    Open { selected: Option<usize> },
}

/// What a commit handed to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Selection<'a> {
    Employee(&'a Employee),
    Skill(&'a str),
    /// Query text committed as a skill no employee lists.
    AdHocSkill(String),
}

/// Caller-supplied commit callbacks.
pub trait SelectionHandler {
    fn on_employee_select(&mut self, employee: &Employee);

    fn on_skill_select(&mut self, label: &str);

    /// Whether a skill-select callback is wired up at all.
    fn accepts_skills(&self) -> bool {
        true
    }
}

/// Handler that appends every committed employee id and skill label, in
/// commit order. Used when replaying key scripts.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub employees: Vec<String>,
    pub skills: Vec<String>,
    pub skills_enabled: bool,
}

impl RecordingHandler {
    #[must_use]
    pub fn new(skills_enabled: bool) -> Self {
        Self {
            skills_enabled,
            ..Self::default()
        }
    }
}

impl SelectionHandler for RecordingHandler {
    fn on_employee_select(&mut self, employee: &Employee) {
        self.employees.push(employee.id.to_string());
    }

    fn on_skill_select(&mut self, label: &str) {
        self.skills.push(label.to_string());
    }

    fn accepts_skills(&self) -> bool {
        self.skills_enabled
    }
}

/// Search input with dropdown navigation.
pub struct SearchBox<'a> {
    engine: SearchEngine,
    employees: &'a [Employee],
    query: String,
    results: Vec<SearchResult<'a>>,
    selected: Option<usize>,
    open: bool,
}

impl<'a> SearchBox<'a> {
    #[must_use]
    pub fn new(engine: SearchEngine, employees: &'a [Employee]) -> Self {
        Self {
            engine,
            employees,
            query: String::new(),
            results: Vec::new(),
            selected: None,
            open: false,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[SearchResult<'a>] {
        &self.results
    }

    #[must_use]
    pub const fn state(&self) -> NavState {
        if self.open {
            NavState::Open {
                selected: self.selected,
            }
        } else {
            NavState::Closed
        }
    }

    /// Replace the query text and re-rank. The highlight is cleared.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.results = self.engine.search(self.employees, &self.query);
        self.selected = None;
        self.open = !self.query.trim().is_empty() && !self.results.is_empty();
    }

    /// Point the box at a fresh employee snapshot, re-ranking the current query.
    pub fn refresh(&mut self, employees: &'a [Employee]) {
        self.employees = employees;
        let query = std::mem::take(&mut self.query);
        self.set_query(query);
    }

    /// Apply one key press. Returns the selection if the key committed one.
    pub fn handle_key(
        &mut self,
        key: NavKey,
        handler: &mut dyn SelectionHandler,
    ) -> Option<Selection<'a>> {
        match key {
            NavKey::Down => {
                self.selected = match self.selected {
                    None if self.results.is_empty() => None,
                    None => Some(0),
                    Some(i) => Some((i + 1).min(self.results.len().saturating_sub(1))),
                };
                None
            }
            NavKey::Up => {
                self.selected = match self.selected {
                    None | Some(0) => None,
                    Some(i) => Some(i - 1),
                };
                None
            }
            NavKey::Escape => {
                self.close();
                None
            }
            NavKey::Enter => self.commit(handler),
        }
    }

    fn commit(&mut self, handler: &mut dyn SelectionHandler) -> Option<Selection<'a>> {
        let chosen = self
            .selected
            .and_then(|i| self.results.get(i))
            .or_else(|| self.results.first())
            .copied();

        let selection = match chosen {
            Some(SearchResult::Employee { employee, .. }) => {
                handler.on_employee_select(employee);
                Selection::Employee(employee)
            }
            Some(SearchResult::Skill { label, .. }) => {
                handler.on_skill_select(label);
                Selection::Skill(label)
            }
            None => {
                let text = self.query.trim();
                if text.is_empty() || !handler.accepts_skills() {
                    return None;
                }
                handler.on_skill_select(text);
                Selection::AdHocSkill(text.to_string())
            }
        };

        debug!(?selection, "search selection committed");
        self.close();
        Some(selection)
    }

    fn close(&mut self) {
        self.query.clear();
        self.results.clear();
        self.selected = None;
        self.open = false;
    }
}
