use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{Result, SkmError};
use crate::taxonomy::SkillCategory;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("SKM_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parse a single TOML document on top of the defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let patch: ConfigPatch =
            toml::from_str(raw).map_err(|err| SkmError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        config.validate()?;
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            tracing::debug!("no user config directory, skipping global config");
            return Ok(None);
        };
        Self::load_patch(&dir.join("skillmap/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        let path = project_root.join(".skillmap/config.toml");
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| SkmError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| SkmError::Config(format!("parse config {}: {err}", path.display())))?;
        tracing::debug!(path = %path.display(), "merged config file");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.classifier {
            self.classifier.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_bool("SKM_CLASSIFIER_NORMALIZE") {
            self.classifier.normalize_labels = value;
        }

        if let Some(value) = env_f64("SKM_SEARCH_THRESHOLD")? {
            self.search.threshold = value;
        }
        if let Some(value) = env_f64("SKM_SEARCH_NAME_BOOST")? {
            self.search.name_boost = value;
        }
        if let Some(value) = env_f64("SKM_SEARCH_TITLE_BOOST")? {
            self.search.title_boost = value;
        }
        if let Some(value) = env_usize("SKM_SEARCH_MAX_RESULTS")? {
            self.search.max_results = value;
        }

        if let Some(value) = env_string("SKM_OUTPUT_FORMAT") {
            self.output.format = value;
        }
        if env_bool("SKM_ROBOT").unwrap_or(false) {
            self.output.format = "json".to_string();
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        match self.output.format.as_str() {
            "human" | "json" => Ok(()),
            other => Err(SkmError::Config(format!(
                "invalid output format {other} (expected human|json)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Trim and lower-case labels on both sides of the lookup.
    #[serde(default)]
    pub normalize_labels: bool,
    /// Extra labels per category, consulted before the built-in lists.
    #[serde(default)]
    pub categories: IndexMap<SkillCategory, Vec<String>>,
}

impl ClassifierConfig {
    fn merge(&mut self, patch: ClassifierPatch) {
        if let Some(value) = patch.normalize_labels {
            self.normalize_labels = value;
        }
        if let Some(categories) = patch.categories {
            for (category, values) in categories {
                let existing = self.categories.entry(category).or_default();
                *existing = merge_unique(values, existing);
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_name_boost")]
    pub name_boost: f64,
    #[serde(default = "default_title_boost")]
    pub title_boost: f64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

const fn default_threshold() -> f64 {
    0.3
}

const fn default_name_boost() -> f64 {
    0.5
}

const fn default_title_boost() -> f64 {
    0.3
}

const fn default_max_results() -> usize {
    8
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            name_boost: default_name_boost(),
            title_boost: default_title_boost(),
            max_results: default_max_results(),
        }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.threshold {
            self.threshold = value;
        }
        if let Some(value) = patch.name_boost {
            self.name_boost = value;
        }
        if let Some(value) = patch.title_boost {
            self.title_boost = value;
        }
        if let Some(value) = patch.max_results {
            self.max_results = value;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SkmError::Config(format!(
                "search.threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        for (key, value) in [("name_boost", self.name_boost), ("title_boost", self.title_boost)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SkmError::Config(format!(
                    "search.{key} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.max_results == 0 {
            return Err(SkmError::Config(
                "search.max_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub classifier: Option<ClassifierPatch>,
    pub search: Option<SearchPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ClassifierPatch {
    pub normalize_labels: Option<bool>,
    pub categories: Option<IndexMap<SkillCategory, Vec<String>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub threshold: Option<f64>,
    pub name_boost: Option<f64>,
    pub title_boost: Option<f64>,
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<String>,
}

fn merge_unique(values: Vec<String>, existing: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values.into_iter().chain(existing.iter().cloned()) {
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

/// Output format requested through the environment alone, with the same
/// precedence `Config::load` applies (`SKM_ROBOT` beats `SKM_OUTPUT_FORMAT`).
#[must_use]
pub fn env_output_format() -> Option<OutputFormat> {
    if env_bool("SKM_ROBOT").unwrap_or(false) {
        return Some(OutputFormat::Json);
    }
    env_string("SKM_OUTPUT_FORMAT").map(|value| OutputFormat::from_config(&value))
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(|err| SkmError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|err| SkmError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}
