//! Print the character tag vocabulary.

use anyhow::Result;
use clap::Parser;

use super::DataArgs;
use crate::config::CliConfig;

/// Print the character tag vocabulary
#[derive(Parser)]
pub struct Tags {
    #[command(flatten)]
    data: DataArgs,

    /// Minimum number of characters carrying a tag (defaults to the tunables file)
    #[arg(long, value_name = "N")]
    min: Option<usize>,
}

impl Tags {
    pub fn execute(self, env: &CliConfig) -> Result<()> {
        let planner = self.data.load_planner(env)?;
        let tags = match self.min {
            Some(min) => team_core::filter::tag_vocabulary(planner.catalog().characters(), min),
            None => planner.character_tags(),
        };

        for tag in tags {
            println!("{tag}");
        }
        Ok(())
    }
}
