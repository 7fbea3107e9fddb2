use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::{Result, SkmError};
use crate::model::Snapshot;
use crate::search::SearchEngine;
use crate::taxonomy::{CategoryTable, SkillDirectory, TableClassifier};

/// Everything a subcommand needs: effective config, output mode and the
/// snapshot location.
pub struct AppContext {
    pub config: Config,
    pub data_path: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        let output_format = cli
            .requested_format()
            .unwrap_or_else(|| OutputFormat::from_config(&config.output.format));

        debug!(
            root = %project_root.display(),
            format = ?output_format,
            "application context ready"
        );

        Ok(Self {
            config,
            data_path: cli.data.clone(),
            output_format,
        })
    }

    /// Context for an explicit config and snapshot, bypassing discovery.
    #[must_use]
    pub fn with_config(config: Config, data_path: Option<&Path>) -> Self {
        let output_format = OutputFormat::from_config(&config.output.format);
        Self {
            config,
            data_path: data_path.map(Path::to_path_buf),
            output_format,
        }
    }

    #[must_use]
    pub const fn robot(&self) -> bool {
        self.output_format.is_robot()
    }

    pub fn load_snapshot(&self) -> Result<Snapshot> {
        let path = self.data_path.as_deref().ok_or_else(|| {
            SkmError::MissingConfig("no snapshot given (use --data or SKM_DATA)".to_string())
        })?;
        Snapshot::load(path)
    }

    /// Classifier built from the effective `[classifier]` config.
    #[must_use]
    pub fn classifier(&self) -> TableClassifier {
        TableClassifier::new(CategoryTable::from_config(&self.config.classifier))
    }

    pub fn directory(&self) -> Result<SkillDirectory> {
        let snapshot = self.load_snapshot()?;
        Ok(SkillDirectory::with_classifier(
            snapshot,
            Box::new(self.classifier()),
        ))
    }

    #[must_use]
    pub fn search_engine(&self) -> SearchEngine {
        SearchEngine::new(self.config.search.clone())
    }
}
