//! Browse the character catalog.

use anyhow::Result;
use clap::Parser;
use console::style;
use team_core::CharacterFilter;

use super::{DataArgs, OutputFormat, print_json};
use crate::config::CliConfig;

/// List characters matching a search and tags
#[derive(Parser)]
pub struct Characters {
    #[command(flatten)]
    data: DataArgs,

    /// Case-insensitive name search
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    search: String,

    /// Characters must carry every one of these tags
    #[arg(short, long = "tag", value_name = "TAG")]
    tags: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Characters {
    pub fn execute(self, env: &CliConfig) -> Result<()> {
        let planner = self.data.load_planner(env)?;
        let filter = CharacterFilter::new()
            .with_search(self.search)
            .with_tags(self.tags);
        let matches = filter.apply(planner.catalog().characters());

        match self.format {
            OutputFormat::Summary => {
                for character in matches {
                    let element = character.element.map(|e| e.code()).unwrap_or("---");
                    let rarity = character.rarity.as_deref().unwrap_or("?");
                    println!(
                        "{} {} {}",
                        style(format!("{element:<3}")).cyan(),
                        style(format!("{rarity:<9}")).yellow(),
                        style(&character.name).bold()
                    );
                    if !character.visual_tags.is_empty() {
                        println!("    {}", style(character.visual_tags.join(", ")).dim());
                    }
                }
            }
            OutputFormat::Json => print_json(&matches)?,
        }

        Ok(())
    }
}
