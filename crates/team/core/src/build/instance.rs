use tracing::{debug, warn};

use crate::config::BuilderConfig;
use crate::model::Equipment;

use super::BuildError;

/// Identifies one equip event. Re-equipping an item yields a fresh id, so stale
/// branch selections never leak into the new instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceId(pub u32);

/// An equipment record placed in a build slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquippedInstance {
    pub id: InstanceId,
    pub equipment: Equipment,
    /// Battle-member count assumed for scaled effects (0..=3).
    pub multiplier: u8,
}

impl EquippedInstance {
    fn new(id: InstanceId, equipment: Equipment) -> Self {
        Self {
            id,
            equipment,
            multiplier: 0,
        }
    }

    /// Advances the multiplier 0 -> 1 -> 2 -> 3 -> 0.
    pub fn toggle_multiplier(&mut self) -> u8 {
        self.multiplier = (self.multiplier + 1) % (BuilderConfig::MAX_MULTIPLIER + 1);
        self.multiplier
    }
}

/// Up to [`BuilderConfig::EQUIP_SLOTS`] equipped items.
///
/// Removing an item empties its slot without shifting the others; equipping
/// fills the first empty slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Build {
    slots: [Option<EquippedInstance>; BuilderConfig::EQUIP_SLOTS],
    next_id: u32,
}

impl Build {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Option<EquippedInstance>] {
        &self.slots
    }

    pub fn slot(&self, slot: usize) -> Option<&EquippedInstance> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Occupied slots with their indices.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &EquippedInstance)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|instance| (index, instance)))
    }

    pub fn len(&self) -> usize {
        self.occupied().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Slot currently holding the same catalog item, if any.
    pub fn position_of(&self, equipment: &Equipment) -> Option<usize> {
        self.occupied()
            .find(|(_, instance)| instance.equipment.same_item(equipment))
            .map(|(index, _)| index)
    }

    /// Places a copy of `equipment` in the first empty slot and returns that slot.
    ///
    /// # Errors
    ///
    /// [`BuildError::DuplicateEquip`] when the item is already equipped,
    /// [`BuildError::SlotsFull`] when no slot is free.
    pub fn equip(&mut self, equipment: &Equipment) -> Result<usize, BuildError> {
        if let Some(slot) = self.position_of(equipment) {
            warn!(equipment = %equipment.name, slot, "rejected duplicate equip");
            return Err(BuildError::DuplicateEquip {
                name: equipment.name.clone(),
                slot,
            });
        }

        let Some(slot) = self.slots.iter().position(Option::is_none) else {
            warn!(equipment = %equipment.name, "rejected equip: all slots occupied");
            return Err(BuildError::SlotsFull {
                capacity: BuilderConfig::EQUIP_SLOTS,
            });
        };

        let id = InstanceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.slots[slot] = Some(EquippedInstance::new(id, equipment.clone()));
        debug!(equipment = %equipment.name, slot, instance = id.0, "equipped");

        Ok(slot)
    }

    /// Empties a slot, returning what it held.
    pub fn unequip(&mut self, slot: usize) -> Option<EquippedInstance> {
        let removed = self.slots.get_mut(slot).and_then(Option::take);
        if let Some(instance) = &removed {
            debug!(equipment = %instance.equipment.name, slot, "unequipped");
        }
        removed
    }

    /// Advances the multiplier of an occupied slot. `None` for an empty slot.
    pub fn toggle_multiplier(&mut self, slot: usize) -> Option<u8> {
        let instance = self.slots.get_mut(slot)?.as_mut()?;
        let multiplier = instance.toggle_multiplier();
        debug!(equipment = %instance.equipment.name, slot, multiplier, "multiplier toggled");
        Some(multiplier)
    }

    /// Sets a multiplier directly, clamped to [`BuilderConfig::MAX_MULTIPLIER`].
    pub fn set_multiplier(&mut self, slot: usize, multiplier: u8) -> Option<u8> {
        let instance = self.slots.get_mut(slot)?.as_mut()?;
        instance.multiplier = multiplier.min(BuilderConfig::MAX_MULTIPLIER);
        debug!(equipment = %instance.equipment.name, slot, multiplier = instance.multiplier, "multiplier set");
        Some(instance.multiplier)
    }
}
