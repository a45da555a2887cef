//! Interactive planning session.
//!
//! [`BuildPlanner`] owns every piece of mutable state (selected character,
//! build, branch selections, equipment facets) and funnels writes through
//! methods that recompute the [`Analysis`] from scratch. Rejected writes leave
//! both the state and the last analysis untouched.

use tracing::debug;

use crate::build::{Build, BuildError, EquippedInstance, SelectionKey, SelectionStore};
use crate::catalog::{Catalog, CatalogError};
use crate::config::BuilderConfig;
use crate::engine::{Analysis, analyze};
use crate::filter::{EquipmentFilter, tag_vocabulary};
use crate::model::{Character, Equipment};
use crate::stats::StatKind;

#[derive(Clone, Debug, Default)]
pub struct BuildPlanner {
    catalog: Catalog,
    config: BuilderConfig,
    character: Option<Character>,
    build: Build,
    selections: SelectionStore,
    filter: EquipmentFilter,
    analysis: Analysis,
}

impl BuildPlanner {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, BuilderConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: BuilderConfig) -> Self {
        Self {
            catalog,
            config,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    pub fn build(&self) -> &Build {
        &self.build
    }

    pub fn selections(&self) -> &SelectionStore {
        &self.selections
    }

    pub fn filter(&self) -> &EquipmentFilter {
        &self.filter
    }

    /// Result of the last successful write.
    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    // ===== character =====

    /// Selects a character (by value) and drops condition facets it does not offer.
    pub fn select_character(&mut self, character: Character) {
        debug!(character = %character.name, "character selected");
        self.filter.retain_conditions_for(&character);
        self.character = Some(character);
        self.recompute();
    }

    /// Selects a catalog character by id, code or name.
    pub fn select_character_by(&mut self, reference: &str) -> Option<&Character> {
        let character = self.catalog.find_character(reference)?.clone();
        self.select_character(character);
        self.character.as_ref()
    }

    pub fn clear_character(&mut self) {
        if self.character.take().is_some() {
            self.recompute();
        }
    }

    // ===== build =====

    /// Equips an item in the first free slot.
    ///
    /// # Errors
    ///
    /// Propagates [`BuildError`]; the analysis is not recomputed.
    pub fn equip(&mut self, equipment: &Equipment) -> Result<usize, BuildError> {
        let slot = self.build.equip(equipment)?;
        self.recompute();
        Ok(slot)
    }

    /// Empties a slot and discards the branch selections of its instance.
    pub fn unequip(&mut self, slot: usize) -> Option<EquippedInstance> {
        let removed = self.build.unequip(slot)?;
        self.selections.forget(removed.id);
        self.recompute();
        Some(removed)
    }

    pub fn toggle_multiplier(&mut self, slot: usize) -> Option<u8> {
        let multiplier = self.build.toggle_multiplier(slot)?;
        self.recompute();
        Some(multiplier)
    }

    /// Sets the multiplier of an occupied slot, clamped to the maximum.
    pub fn set_multiplier(&mut self, slot: usize, multiplier: u8) -> Option<u8> {
        let multiplier = self.build.set_multiplier(slot, multiplier)?;
        self.recompute();
        Some(multiplier)
    }

    /// Advances the OR option of one effect line. Returns the new option, or
    /// `None` when the slot is empty or the line offers no choice.
    pub fn toggle_branch(&mut self, slot: usize, effect_slot: usize) -> Option<usize> {
        let instance = self.build.slot(slot)?;
        let text = instance.equipment.slots.get(effect_slot)?.effect.as_str();
        let key = SelectionKey::new(instance.id, effect_slot);

        if !self.selections.toggle(key, text) {
            return None;
        }
        let selected = self.selections.selected(key);
        self.recompute();
        Some(selected)
    }

    // ===== facets =====

    pub fn set_effect_facets(&mut self, effects: impl IntoIterator<Item = StatKind>) {
        self.filter.effects = effects.into_iter().collect();
    }

    pub fn toggle_effect_facet(&mut self, stat: StatKind) -> bool {
        self.filter.toggle_effect(stat)
    }

    pub fn toggle_condition_facet(&mut self, token: &str) -> bool {
        self.filter.toggle_condition(token)
    }

    /// Equipment passing applicability for the selected character and every facet.
    pub fn eligible_equipment(&self) -> Vec<&Equipment> {
        self.filter
            .apply(self.catalog.equipment(), self.character.as_ref())
    }

    /// Character tag vocabulary under the configured occurrence threshold.
    pub fn character_tags(&self) -> Vec<String> {
        tag_vocabulary(self.catalog.characters(), self.config.tag_min_occurrences)
    }

    // ===== data =====

    /// Swaps in a freshly loaded character set. The selected character is a
    /// copy and stays selected.
    pub fn replace_characters(&mut self, characters: Vec<Character>) -> Result<(), CatalogError> {
        self.catalog.replace_characters(characters)
    }

    /// Swaps in a freshly loaded equipment set. Equipped items are copies and
    /// stay equipped.
    pub fn replace_equipment(&mut self, equipment: Vec<Equipment>) -> Result<(), CatalogError> {
        self.catalog.replace_equipment(equipment)
    }

    fn recompute(&mut self) {
        self.analysis = analyze(&self.build, &self.selections, self.character.as_ref());
    }
}
