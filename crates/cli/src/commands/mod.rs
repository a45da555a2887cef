//! Subcommands and the arguments they share.

mod characters;
mod equipment;
mod stats;
mod tags;

pub use characters::Characters;
pub use equipment::EquipmentCmd;
pub use stats::Stats;
pub use tags::Tags;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use team_content::{CatalogLoader, ConfigLoader, ContentFactory};
use team_core::{BuildPlanner, StatKind};
use tracing::info;

use crate::config::CliConfig;

/// Data file overrides shared by every subcommand.
#[derive(Args)]
pub struct DataArgs {
    /// Data directory (defaults to TEAM_DATA_DIR or the platform data directory)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Characters JSON file (defaults to TEAM_CHARACTERS or <DIR>/characters.json)
    #[arg(long, value_name = "FILE")]
    characters: Option<PathBuf>,

    /// Equipment JSON file (defaults to TEAM_EQUIPMENT or <DIR>/equipment.json)
    #[arg(long, value_name = "FILE")]
    equipment: Option<PathBuf>,

    /// Tunables TOML file (defaults to TEAM_CONFIG or <DIR>/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl DataArgs {
    /// Loads the catalog and tunables into a fresh planning session.
    pub fn load_planner(&self, env: &CliConfig) -> Result<BuildPlanner> {
        let factory = ContentFactory::new(
            self.data_dir
                .clone()
                .unwrap_or_else(|| env.data_dir.clone()),
        );

        let characters = self
            .characters
            .clone()
            .or_else(|| env.characters.clone())
            .unwrap_or_else(|| factory.characters_path());
        let equipment = self
            .equipment
            .clone()
            .or_else(|| env.equipment.clone())
            .unwrap_or_else(|| factory.equipment_path());

        let config = match self.config.clone().or_else(|| env.tunables.clone()) {
            Some(path) => ConfigLoader::load(&path)?,
            None => factory.load_config()?,
        };

        let catalog = CatalogLoader::load(&characters, &equipment)
            .context("Failed to load catalog")?;
        info!(
            characters = catalog.characters().len(),
            equipment = catalog.equipment().len(),
            "catalog loaded"
        );

        Ok(BuildPlanner::with_config(catalog, config))
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Styled, human-readable view
    Summary,
    /// Full JSON output
    Json,
}

/// Parses a registry stat name such as "Base Strike Attack".
pub fn parse_stat(value: &str) -> Result<StatKind, String> {
    value.parse::<StatKind>().map_err(|_| {
        let known: Vec<_> = StatKind::all().iter().map(|s| s.name()).collect();
        format!("unknown stat {value:?}; expected one of: {}", known.join(", "))
    })
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output to JSON")?;
    println!("{}", json);
    Ok(())
}
