//! Stat aggregation.
//!
//! [`analyze`] recomputes the whole stat sheet from the build, the selection
//! store and the selected character. There is no incremental path: every write
//! event calls it again.

use tracing::debug;

use crate::build::{Build, InstanceId, SelectionKey, SelectionStore};
use crate::effect::{ParseContext, parse_effect};
use crate::model::Character;
use crate::stats::StatSheet;

/// OR option picker for one effect line of one equipped item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BranchSelector {
    /// Build slot holding the item.
    pub build_slot: usize,
    /// Effect line within the item.
    pub effect_slot: usize,
    pub instance: InstanceId,
    pub options: Vec<String>,
    pub selected: usize,
}

/// Everything a display needs after a recompute.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Analysis {
    pub sheet: StatSheet,
    /// Unrecognized effect text, de-duplicated, in first-seen order.
    pub other_effects: Vec<String>,
    pub selectors: Vec<BranchSelector>,
}

/// Aggregates every equipped effect line into one [`Analysis`].
pub fn analyze(
    build: &Build,
    selections: &SelectionStore,
    character: Option<&Character>,
) -> Analysis {
    let mut analysis = Analysis::default();

    for (build_slot, instance) in build.occupied() {
        let ctx = ParseContext::new(character, instance.multiplier);

        for (effect_slot, text) in instance.equipment.effects().enumerate() {
            if text.is_empty() {
                continue;
            }

            let key = SelectionKey::new(instance.id, effect_slot);
            let line = parse_effect(text, selections.selected(key), &ctx);

            if line.is_conditional() {
                for stat in line.touched() {
                    analysis.sheet.mark_conditional(stat);
                }
                analysis.selectors.push(BranchSelector {
                    build_slot,
                    effect_slot,
                    instance: instance.id,
                    options: line.options.clone(),
                    selected: line.selected,
                });
            }

            for contribution in &line.contributions {
                analysis.sheet.add(contribution.stat, contribution.delta);
            }

            if let Some(residual) = line.residual
                && !analysis.other_effects.contains(&residual)
            {
                analysis.other_effects.push(residual);
            }
        }
    }

    debug!(
        equipped = build.len(),
        other_effects = analysis.other_effects.len(),
        selectors = analysis.selectors.len(),
        "stats recomputed"
    );

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Equipment;
    use crate::stats::StatKind;

    #[test]
    fn empty_build_yields_zero_sheet() {
        let analysis = analyze(&Build::new(), &SelectionStore::new(), None);
        assert_eq!(analysis, Analysis::default());
    }

    #[test]
    fn conditional_flag_covers_zero_contributions() {
        let mut build = Build::new();
        build
            .equip(
                &Equipment::new("Potara")
                    .with_id("9")
                    .with_effect(
                        "10.00% to Blast Attack when 'Tag: Potara' is a battle member - OR - Ki +10",
                    ),
            )
            .unwrap();

        let analysis = analyze(&build, &SelectionStore::new(), None);
        assert_eq!(analysis.sheet.value(StatKind::BlastAttack), 0.0);
        assert!(analysis.sheet.is_conditional(StatKind::BlastAttack));
        assert_eq!(analysis.selectors.len(), 1);
        assert!(analysis.other_effects.is_empty());
    }

    #[test]
    fn residuals_are_deduplicated() {
        let mut build = Build::new();
        for id in ["1", "2"] {
            build
                .equip(&Equipment::new(format!("Charm {id}")).with_id(id).with_effect("Revives once."))
                .unwrap();
        }
        let analysis = analyze(&build, &SelectionStore::new(), None);
        assert_eq!(analysis.other_effects, vec!["Revives once.".to_owned()]);
    }
}
