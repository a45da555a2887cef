//! Catalog and tunables loaders.
//!
//! Characters and equipment arrive as JSON arrays (as exported by the scraper
//! or the document store), tunables as TOML. Every loader validates the whole
//! file before handing records to `team-core`; a malformed file is rejected as
//! a unit.

pub mod loaders;

pub use loaders::{
    CatalogLoader, CharacterLoader, ConfigLoader, ContentFactory, EquipmentLoader, LoadResult,
};
