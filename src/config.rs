use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

pub fn default_config_path() -> PathBuf {
    if let Some(dir) = dirs::config_dir() {
        return dir.join("stlitify").join("config.toml");
    }
    PathBuf::from("stlitify/config.toml")
}

/// Optional user config. Everything here defaults to "do nothing": a
/// missing file is equivalent to an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default stlite version, overridden by --stlite-version.
    #[serde(default)]
    pub stlite_version: Option<String>,

    #[serde(default)]
    pub requirements: RequirementsConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct RequirementsConfig {
    /// Packages always appended to the resolved requirement set.
    #[serde(default)]
    pub add: Vec<String>,

    /// Extra module -> pip distribution renames, applied to the resolved
    /// set after extraction (on top of the built-in alias table).
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl Config {
    /// Load from `path`, or from the XDG default when `path` is `None`.
    /// A missing default file yields `Config::default()`; an explicitly
    /// given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_config_path(), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let cfg: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        Ok(cfg)
    }

    /// Apply alias renames and always-add packages to a resolved
    /// requirement set. Output stays sorted and deduplicated.
    pub fn apply_requirements(&self, reqs: Vec<String>) -> Vec<String> {
        let mut set: BTreeSet<String> = reqs
            .into_iter()
            .map(|r| self.requirements.aliases.get(&r).cloned().unwrap_or(r))
            .collect();
        set.extend(self.requirements.add.iter().cloned());
        set.into_iter().collect()
    }
}
