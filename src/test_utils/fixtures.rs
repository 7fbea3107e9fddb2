//! Canned employees, endorsements and config files for tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::model::{Employee, Endorsement, Snapshot};

/// A single frontend developer with two technology skills.
#[must_use]
pub fn sarah_chen() -> Employee {
    Employee::new(1u64, "Sarah Chen", "Senior Frontend Developer")
        .with_skills(["React", "TypeScript"])
}

/// Eight employees spanning every built-in category, plus one with no skills.
#[must_use]
pub fn sample_team() -> Vec<Employee> {
    vec![
        sarah_chen(),
        Employee::new(2u64, "Marcus Johnson", "Full Stack Engineer")
            .with_skills(["React", "Node.js", "AWS"]),
        Employee::new(3u64, "Priya Patel", "Product Designer")
            .with_skills(["Figma", "UX Research", "Prototyping"]),
        Employee::new(4u64, "David Kim", "Data Analyst")
            .with_skills(["SQL", "Tableau", "Data Analysis"]),
        Employee::new(5u64, "Elena Rodriguez", "Marketing Manager")
            .with_skills(["SEO", "Content Marketing", "Leadership"]),
        Employee::new(6u64, "James Wilson", "Finance Lead")
            .with_skills(["Financial Modeling", "Budgeting", "Excel"]),
        Employee::new(7u64, "Aisha Okafor", "Engineering Manager")
            .with_skills(["Leadership", "Agile", "Python"]),
        Employee::new(8u64, "Tom Becker", "Intern"),
    ]
}

/// Endorsements for [`sample_team`], including one for an unlisted skill.
#[must_use]
pub fn sample_endorsements() -> Vec<Endorsement> {
    vec![
        Endorsement::new("React", 1u64).by(2u64),
        Endorsement::new("React", 1u64).by(7u64),
        Endorsement::new("React", 2u64).by(1u64),
        Endorsement::new("TypeScript", 1u64).by(2u64),
        Endorsement::new("Figma", 3u64).by(5u64),
        Endorsement::new("SQL", 4u64).by(6u64),
        Endorsement::new("Leadership", 5u64).by(7u64),
        Endorsement::new("Leadership", 7u64).by(5u64),
        Endorsement::new("Budgeting", 6u64).by(7u64),
        Endorsement::new("Cobol", 8u64).by(1u64),
    ]
}

#[must_use]
pub fn sample_snapshot() -> Snapshot {
    Snapshot::new(sample_team(), sample_endorsements())
}

/// Isolated directory holding config and data files.
pub struct ConfigFixture {
    pub temp_dir: TempDir,
}

impl ConfigFixture {
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` at `relative`, creating parent directories.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write fixture file");
        path
    }

    /// Write a project-level config under `.skillmap/config.toml`.
    #[must_use]
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        self.write(".skillmap/config.toml", content)
    }

    /// Write [`sample_snapshot`] as JSON and return its path.
    ///
    /// # Panics
    ///
    /// Panics if the snapshot cannot be serialized.
    #[must_use]
    pub fn write_sample_snapshot(&self) -> PathBuf {
        let json = serde_json::to_string_pretty(&sample_snapshot()).expect("serialize snapshot");
        self.write("snapshot.json", &json)
    }
}

impl Default for ConfigFixture {
    fn default() -> Self {
        Self::new()
    }
}
