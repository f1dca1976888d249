//! Configuration file support for pom-graph.
//!
//! Provides YAML-based configuration through `pom-graph.config.yml` files,
//! looked up next to the root descriptor, and merges it with CLI flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::DEFAULT_MAX_DEPTH;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pom-graph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub depth: Option<usize>,
    pub local_repository: Option<PathBuf>,
    pub strict: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Unknown keys, sorted for stable warning output
    pub fn unknown_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.unknown_fields.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
///
/// A relative `local_repository` is taken relative to the config file.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    if let (Some(repo), Some(base)) = (config.local_repository.as_ref(), path.parent()) {
        if repo.is_relative() {
            config.local_repository = Some(base.join(repo));
        }
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref repo) = config.local_repository {
        if repo.as_os_str().is_empty() {
            bail!(
                "Invalid config: local_repository must not be empty.\n\n\
                 💡 Hint: Remove the key or set it to the path of your Maven local repository."
            );
        }
    }
    Ok(())
}

/// Effective settings after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_depth: usize,
    pub local_repository: Option<PathBuf>,
    pub strict: bool,
}

impl Settings {
    /// CLI flags win over the config file, which wins over built-in defaults.
    pub fn resolve(
        cli_depth: Option<usize>,
        cli_local_repository: Option<PathBuf>,
        cli_strict: bool,
        config: Option<&ConfigFile>,
    ) -> Self {
        let max_depth = cli_depth
            .or_else(|| config.and_then(|c| c.depth))
            .unwrap_or(DEFAULT_MAX_DEPTH);
        let local_repository =
            cli_local_repository.or_else(|| config.and_then(|c| c.local_repository.clone()));
        let strict = cli_strict || config.and_then(|c| c.strict).unwrap_or(false);

        Self {
            max_depth,
            local_repository,
            strict,
        }
    }
}
