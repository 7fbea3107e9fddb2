//! Snapshot data consumed by the taxonomy and search core.
//!
//! Employees and endorsements are read-only inputs supplied by the caller
//! (usually fetched from the marketplace backend). Skill labels are free
//! text and are never normalized here.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkmError};

/// Opaque employee identity.
///
/// Upstream payloads use numeric ids; both numbers and strings are
/// accepted and the id is always kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawEmployeeId", into = "String")]
pub struct EmployeeId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEmployeeId {
    Number(i64),
    Text(String),
}

impl From<RawEmployeeId> for EmployeeId {
    fn from(raw: RawEmployeeId) -> Self {
        match raw {
            RawEmployeeId::Number(n) => Self(n.to_string()),
            RawEmployeeId::Text(s) => Self(s),
        }
    }
}

impl From<EmployeeId> for String {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for EmployeeId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An employee profile as seen by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub title: String,
    /// Free-text skill labels; duplicates and case variants are tolerated.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Employee {
    pub fn new(id: impl Into<EmployeeId>, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: title.into(),
            skills: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills.extend(skills.into_iter().map(Into::into));
        self
    }

    /// Whether this employee lists `label` verbatim.
    #[must_use]
    pub fn has_skill(&self, label: &str) -> bool {
        self.skills.iter().any(|s| s == label)
    }
}

/// A single endorsement event.
///
/// Each event adds one to the endorsement weight of the skill node whose
/// label matches `skill`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endorsement {
    pub skill: String,
    #[serde(alias = "employee_id")]
    pub employee_id: EmployeeId,
    #[serde(default, alias = "endorser_id", skip_serializing_if = "Option::is_none")]
    pub endorser_id: Option<EmployeeId>,
}

impl Endorsement {
    pub fn new(skill: impl Into<String>, employee_id: impl Into<EmployeeId>) -> Self {
        Self {
            skill: skill.into(),
            employee_id: employee_id.into(),
            endorser_id: None,
        }
    }

    #[must_use]
    pub fn by(mut self, endorser: impl Into<EmployeeId>) -> Self {
        self.endorser_id = Some(endorser.into());
        self
    }
}

/// A point-in-time view of employees and endorsements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub endorsements: Vec<Endorsement>,
}

impl Snapshot {
    #[must_use]
    pub const fn new(employees: Vec<Employee>, endorsements: Vec<Endorsement>) -> Self {
        Self {
            employees,
            endorsements,
        }
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| SkmError::Snapshot(format!("parse snapshot: {err}")))
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| SkmError::Snapshot(format!("read {}: {err}", path.display())))?;
        let snapshot: Self = serde_json::from_str(&raw)
            .map_err(|err| SkmError::Snapshot(format!("parse {}: {err}", path.display())))?;
        tracing::debug!(
            path = %path.display(),
            employees = snapshot.employees.len(),
            endorsements = snapshot.endorsements.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Resolve an employee by id (first match in input order).
    #[must_use]
    pub fn employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }
}
