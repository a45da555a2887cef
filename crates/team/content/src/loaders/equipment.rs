//! Equipment catalog loader.

use std::path::Path;

use anyhow::Context;
use team_core::Equipment;
use team_core::catalog::validate_equipment;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for equipment arrays in JSON.
///
/// Condition groups may be stored as raw token arrays or as `{"tags": [...]}`
/// objects; both load to the same [`team_core::ConditionGroup`].
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load equipment from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON array of equipment records
    pub fn load(path: &Path) -> LoadResult<Vec<Equipment>> {
        let content = read_file(path)?;
        Self::from_json(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse and validate a JSON array of equipment.
    pub fn from_json(content: &str) -> LoadResult<Vec<Equipment>> {
        let equipment: Vec<Equipment> = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment JSON: {}", e))?;
        validate_equipment(&equipment)?;

        let scaled = equipment.iter().filter(|e| e.scales_with_members()).count();
        debug!(count = equipment.len(), scaled, "equipment loaded");
        Ok(equipment)
    }
}
