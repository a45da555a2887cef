//! Character catalog loader.

use std::path::Path;

use anyhow::Context;
use team_core::Character;
use team_core::catalog::validate_characters;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for character arrays in JSON.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load characters from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON array of character records
    pub fn load(path: &Path) -> LoadResult<Vec<Character>> {
        let content = read_file(path)?;
        Self::from_json(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse and validate a JSON array of characters.
    pub fn from_json(content: &str) -> LoadResult<Vec<Character>> {
        let characters: Vec<Character> = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character JSON: {}", e))?;
        validate_characters(&characters)?;

        debug!(count = characters.len(), "characters loaded");
        Ok(characters)
    }
}
