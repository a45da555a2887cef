//! List equipment candidates.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use team_core::{ConditionLogic, Equipment, StatKind};

use super::{DataArgs, OutputFormat, parse_stat, print_json};
use crate::config::CliConfig;

/// List equipment eligible for a character and facets
#[derive(Parser)]
pub struct EquipmentCmd {
    #[command(flatten)]
    data: DataArgs,

    /// Only equipment this character (id, code or name) can use
    #[arg(short, long, value_name = "CHARACTER")]
    character: Option<String>,

    /// Equipment must mention any of these stats (e.g. "Strike Attack")
    #[arg(short, long = "effect", value_name = "STAT", value_parser = parse_stat)]
    effects: Vec<StatKind>,

    /// Equipment conditions must name all of these tokens
    #[arg(long = "condition", value_name = "TAG")]
    conditions: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl EquipmentCmd {
    pub fn execute(self, env: &CliConfig) -> Result<()> {
        let mut planner = self.data.load_planner(env)?;

        if let Some(reference) = &self.character
            && planner.select_character_by(reference).is_none()
        {
            bail!("Character not found: {reference}");
        }

        planner.set_effect_facets(self.effects.iter().copied());
        for token in &self.conditions {
            planner.toggle_condition_facet(token);
        }

        let eligible = planner.eligible_equipment();
        match self.format {
            OutputFormat::Summary => {
                println!(
                    "{} {} of {}",
                    style("Eligible equipment:").bold().cyan(),
                    eligible.len(),
                    planner.catalog().equipment().len()
                );
                println!();
                for equipment in eligible {
                    print_equipment(equipment);
                }
            }
            OutputFormat::Json => print_json(&eligible)?,
        }

        Ok(())
    }
}

fn print_equipment(equipment: &Equipment) {
    let id = equipment
        .id
        .as_deref()
        .map(|id| format!(" (#{id})"))
        .unwrap_or_default();
    println!("{}{}", style(&equipment.name).bold(), style(id).dim());

    if !equipment.conditions_data.is_empty() {
        let joiner = match equipment.condition_logic {
            ConditionLogic::And => " AND ",
            ConditionLogic::Or => " OR ",
        };
        let groups: Vec<_> = equipment
            .conditions_data
            .iter()
            .map(|group| format!("[{}]", group.tokens().join(", ")))
            .collect();
        println!("  {} {}", style("requires").yellow(), groups.join(joiner));
    }

    for effect in equipment.effects().filter(|e| !e.is_empty()) {
        println!("  - {effect}");
    }
    println!();
}
