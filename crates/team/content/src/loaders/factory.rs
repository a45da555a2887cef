//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use team_core::{BuilderConfig, Catalog};
use tracing::debug;

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};

/// Loads catalog content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── characters.json
/// ├── equipment.json
/// └── config.toml      (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CHARACTERS_FILE: &'static str = "characters.json";
    pub const EQUIPMENT_FILE: &'static str = "equipment.json";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn characters_path(&self) -> PathBuf {
        self.data_dir.join(Self::CHARACTERS_FILE)
    }

    pub fn equipment_path(&self) -> PathBuf {
        self.data_dir.join(Self::EQUIPMENT_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(Self::CONFIG_FILE)
    }

    /// Load `characters.json` and `equipment.json`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        CatalogLoader::load(&self.characters_path(), &self.equipment_path())
    }

    /// Load `config.toml`, falling back to defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<BuilderConfig> {
        let path = self.config_path();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(BuilderConfig::default());
        }
        ConfigLoader::load(&path)
    }
}
