//! Project configuration: business rules and prioritization weights.
//!
//! ```toml
//! [weights]
//! priorityLevel = 0.4
//! fulfillment = 0.3
//!
//! [[rules]]
//! id = "pair-t1-t2"
//! type = "coRun"
//! name = "T1 with T2"
//! priority = 1
//! config = { tasks = ["T1", "T2"] }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use roster_model::{BusinessRule, PrioritizationWeights};

use crate::error::{IngestError, Result};

/// Default config file name looked up in a data folder.
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub weights: PrioritizationWeights,
    pub rules: Vec<BusinessRule>,
}

impl ProjectConfig {
    /// Parse config text. Rule IDs must be unique and weights finite and
    /// non-negative; weights are normalized.
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self> {
        let mut config: Self = toml::from_str(contents).map_err(|source| IngestError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        let mut seen = HashSet::new();
        for rule in &config.rules {
            if !seen.insert(rule.id.as_str()) {
                return Err(IngestError::InvalidConfig {
                    path: path.to_path_buf(),
                    reason: format!("duplicate rule id {}", rule.id),
                });
            }
        }
        config
            .weights
            .validate()
            .map_err(|err| IngestError::InvalidConfig {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
        if config.weights.total() <= 0.0 {
            return Err(IngestError::InvalidConfig {
                path: path.to_path_buf(),
                reason: "weights must not all be zero".to_string(),
            });
        }
        config.weights = config.weights.normalized();
        Ok(config)
    }
}

/// Load a project config file.
pub fn load_project_config(path: &Path) -> Result<ProjectConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = ProjectConfig::from_toml(&contents, path)?;
    debug!(path = %path.display(), rules = config.rules.len(), "loaded project config");
    Ok(config)
}

/// Load `path` if given, else `<dir>/roster.toml` if present, else defaults.
pub fn resolve_project_config(explicit: Option<&Path>, dir: &Path) -> Result<ProjectConfig> {
    if let Some(path) = explicit {
        return load_project_config(path);
    }
    let fallback = dir.join(DEFAULT_CONFIG_FILE);
    if fallback.is_file() {
        load_project_config(&fallback)
    } else {
        Ok(ProjectConfig::default())
    }
}
