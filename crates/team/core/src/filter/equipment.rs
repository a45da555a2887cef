use std::collections::BTreeSet;

use crate::effect::preceded_by_base;
use crate::model::{Character, ConditionLogic, Equipment};
use crate::stats::StatKind;

/// Base compounds hide plain stat names ("Base Strike & Blast Attack" holds "Blast Attack").
const BASE_COMPOUNDS: [&str; 2] = ["Base Strike & Blast Attack", "Base Strike & Blast Defense"];

/// Whether `character` meets the equipment's condition groups.
///
/// Tokens inside a group are always ANDed; `condition_logic` combines the
/// groups. Equipment without groups fits everyone.
pub fn is_applicable(equipment: &Equipment, character: &Character) -> bool {
    if equipment.conditions_data.is_empty() {
        return true;
    }

    let attributes = character.attributes();
    let mut groups = equipment.conditions_data.iter();
    match equipment.condition_logic {
        ConditionLogic::And => groups.all(|group| group.is_satisfied_by(&attributes)),
        ConditionLogic::Or => groups.any(|group| group.is_satisfied_by(&attributes)),
    }
}

/// Whether one effect line mentions `stat`.
///
/// A base stat matches its own name or its compound phrase. A plain stat
/// matches only occurrences not preceded by `Base`, so "Strike Attack" never
/// picks up "Base Strike Attack".
pub fn matches_effect(text: &str, stat: StatKind) -> bool {
    if stat.is_base() {
        return text.contains(stat.name())
            || stat
                .compound_phrase()
                .is_some_and(|phrase| text.contains(phrase));
    }

    let text = BASE_COMPOUNDS
        .iter()
        .fold(text.to_owned(), |text, phrase| text.replace(phrase, "|"));
    occurs_without_base(&text, stat.name())
        || stat
            .compound_phrase()
            .is_some_and(|phrase| occurs_without_base(&text, phrase))
}

fn occurs_without_base(text: &str, needle: &str) -> bool {
    text.match_indices(needle)
        .any(|(start, _)| !preceded_by_base(&text[..start]))
}

/// Whether the equipment's flattened condition tokens include every facet.
///
/// Groups are flattened regardless of `condition_logic`; equipment without
/// conditions never passes a non-empty facet set.
pub fn has_conditions(equipment: &Equipment, facets: &BTreeSet<String>) -> bool {
    if facets.is_empty() {
        return true;
    }
    let tokens = equipment.condition_tokens();
    !tokens.is_empty() && facets.iter().all(|facet| tokens.contains(facet.as_str()))
}

/// Stat names offered as effect facets, alphabetically.
pub fn effect_facets() -> Vec<StatKind> {
    let mut facets = StatKind::all().to_vec();
    facets.sort_by_key(|stat| stat.name());
    facets
}

/// Condition facets offered for a character: its name and visual tags.
pub fn condition_facets(character: &Character) -> Vec<String> {
    let mut facets: BTreeSet<&str> = character.visual_tags.iter().map(String::as_str).collect();
    facets.insert(character.name.as_str());
    facets.into_iter().map(str::to_owned).collect()
}

/// User-chosen effect and condition facets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquipmentFilter {
    /// Equipment passes when any line mentions any of these stats.
    pub effects: BTreeSet<StatKind>,
    /// Equipment passes when its conditions name all of these tokens.
    pub conditions: BTreeSet<String>,
}

impl EquipmentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_effects(mut self, effects: impl IntoIterator<Item = StatKind>) -> Self {
        self.effects = effects.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_conditions<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conditions = conditions.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.conditions.is_empty()
    }

    /// Flips an effect facet; returns whether it is now selected.
    pub fn toggle_effect(&mut self, stat: StatKind) -> bool {
        if self.effects.remove(&stat) {
            false
        } else {
            self.effects.insert(stat)
        }
    }

    /// Flips a condition facet; returns whether it is now selected.
    pub fn toggle_condition(&mut self, token: &str) -> bool {
        if self.conditions.remove(token) {
            false
        } else {
            self.conditions.insert(token.to_owned())
        }
    }

    /// Drops condition facets the character no longer offers.
    pub fn retain_conditions_for(&mut self, character: &Character) {
        let offered = condition_facets(character);
        self.conditions.retain(|token| offered.contains(token));
    }

    fn matches_effects(&self, equipment: &Equipment) -> bool {
        self.effects.is_empty()
            || equipment.effects().any(|text| {
                self.effects
                    .iter()
                    .any(|&stat| matches_effect(text, stat))
            })
    }

    /// Applicability (when a character is selected) AND effect facets AND
    /// condition facets.
    pub fn matches(&self, equipment: &Equipment, character: Option<&Character>) -> bool {
        character.is_none_or(|character| is_applicable(equipment, character))
            && self.matches_effects(equipment)
            && has_conditions(equipment, &self.conditions)
    }

    /// Visible candidates, in pool order.
    pub fn apply<'a>(
        &self,
        pool: &'a [Equipment],
        character: Option<&Character>,
    ) -> Vec<&'a Equipment> {
        pool.iter()
            .filter(|equipment| self.matches(equipment, character))
            .collect()
    }
}
