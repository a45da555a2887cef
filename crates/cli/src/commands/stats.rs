//! Build a team and print its stat analysis.

use anyhow::{Context, Result, bail};
use clap::Parser;
use console::style;
use team_core::{Analysis, BuildPlanner, BuilderError, StatEntry};

use super::{DataArgs, OutputFormat, print_json};
use crate::config::CliConfig;

/// Equip items and print the aggregated stat sheet
#[derive(Parser)]
pub struct Stats {
    #[command(flatten)]
    data: DataArgs,

    /// Character by id, code or name
    #[arg(short, long, value_name = "CHARACTER")]
    character: Option<String>,

    /// Equipment by id or name (up to three, in slot order)
    #[arg(short, long = "equip", value_name = "EQUIPMENT", required = true)]
    equip: Vec<String>,

    /// Battle-member multiplier per equipped item, in --equip order
    #[arg(
        short,
        long = "multiplier",
        value_name = "N",
        value_parser = clap::value_parser!(u8).range(0..=3)
    )]
    multipliers: Vec<u8>,

    /// Advance the OR option of an effect line, as SLOT:EFFECT (0-based, repeatable)
    #[arg(short, long = "toggle", value_name = "SLOT:EFFECT", value_parser = parse_toggle)]
    toggles: Vec<(usize, usize)>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Stats {
    pub fn execute(self, env: &CliConfig) -> Result<()> {
        let mut planner = self.data.load_planner(env)?;

        if let Some(reference) = &self.character
            && planner.select_character_by(reference).is_none()
        {
            bail!("Character not found: {reference}");
        }

        for (index, reference) in self.equip.iter().enumerate() {
            let equipment = planner
                .catalog()
                .find_equipment(reference)
                .cloned()
                .with_context(|| format!("Equipment not found: {reference}"))?;
            let slot = match planner.equip(&equipment) {
                Ok(slot) => slot,
                Err(err) => bail!(
                    "Cannot equip {} [{}, {}]: {err}",
                    equipment.name,
                    err.error_code(),
                    err.severity().as_str()
                ),
            };

            if let Some(&multiplier) = self.multipliers.get(index) {
                planner.set_multiplier(slot, multiplier);
            }
        }

        for &(slot, effect) in &self.toggles {
            if planner.toggle_branch(slot, effect).is_none() {
                bail!("Slot {slot} effect {effect} has no OR options to toggle");
            }
        }

        match self.format {
            OutputFormat::Summary => print_summary(&planner),
            OutputFormat::Json => print_json(planner.analysis())?,
        }

        Ok(())
    }
}

fn parse_toggle(value: &str) -> Result<(usize, usize), String> {
    let (slot, effect) = value
        .split_once(':')
        .ok_or_else(|| format!("expected SLOT:EFFECT, got {value:?}"))?;
    let slot = slot.trim().parse().map_err(|_| format!("invalid slot {slot:?}"))?;
    let effect = effect
        .trim()
        .parse()
        .map_err(|_| format!("invalid effect index {effect:?}"))?;
    Ok((slot, effect))
}

fn print_summary(planner: &BuildPlanner) {
    let analysis = planner.analysis();

    if let Some(character) = planner.character() {
        println!("{} {}", style("Character:").bold().cyan(), character.name);
    }

    println!("{}", style("Equipped:").bold().cyan());
    for (slot, instance) in planner.build().occupied() {
        let multiplier = if instance.equipment.scales_with_members() {
            format!(" x{}", instance.multiplier)
        } else {
            String::new()
        };
        println!("  [{slot}] {}{}", instance.equipment.name, style(multiplier).magenta());
    }
    println!();

    print_sheet(analysis);
    print_selectors(analysis);

    if !analysis.other_effects.is_empty() {
        println!("{}", style("Other Effects:").bold().yellow());
        for effect in &analysis.other_effects {
            println!("  - {effect}");
        }
    }
}

fn print_sheet(analysis: &Analysis) {
    println!("{}", style("=== Stats Analysis ===").bold().green());
    for (stat, StatEntry { value, conditional }) in analysis.sheet.iter() {
        let text = if value > 0.0 {
            format!("+{value:.1}%")
        } else {
            "0%".to_owned()
        };
        let text = if conditional {
            style(format!("{text} *")).yellow()
        } else if value > 0.0 {
            style(text).green()
        } else {
            style(text).dim()
        };
        println!("  {:<22} {}", stat.name(), text);
    }
    if analysis.sheet.iter().any(|(_, entry)| entry.conditional) {
        println!("  {}", style("* depends on an OR choice").yellow());
    }
    println!();
}

fn print_selectors(analysis: &Analysis) {
    if analysis.selectors.is_empty() {
        return;
    }
    println!("{}", style("Choices:").bold().yellow());
    for selector in &analysis.selectors {
        println!(
            "  slot {} effect {}:",
            selector.build_slot, selector.effect_slot
        );
        for (index, option) in selector.options.iter().enumerate() {
            let marker = if index == selector.selected { "(x)" } else { "( )" };
            println!("    {marker} {option}");
        }
    }
    println!();
}
