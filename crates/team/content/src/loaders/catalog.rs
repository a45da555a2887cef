//! Combined catalog loader.

use std::path::Path;

use team_core::Catalog;

use crate::loaders::{CharacterLoader, EquipmentLoader, LoadResult};

/// Loads both record sets and adopts them only when both are valid.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(characters: &Path, equipment: &Path) -> LoadResult<Catalog> {
        let characters = CharacterLoader::load(characters)?;
        let equipment = EquipmentLoader::load(equipment)?;
        Ok(Catalog::new(characters, equipment)?)
    }
}
