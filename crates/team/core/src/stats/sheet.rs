//! Aggregated stat totals.
//!
//! A [`StatSheet`] is a derived view: it is rebuilt from scratch on every
//! recompute and never patched incrementally.

use super::StatKind;

/// Accumulated value of one stat.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatEntry {
    /// Summed percentage bonus.
    pub value: f64,
    /// The value depends on a toggleable OR-branch choice.
    pub conditional: bool,
}

/// Every registry stat with its total, in canonical order.
#[derive(Clone, Debug, PartialEq)]
pub struct StatSheet {
    entries: [StatEntry; StatKind::COUNT],
}

impl StatSheet {
    /// Creates a sheet with every stat at zero and unconditional.
    pub fn new() -> Self {
        Self {
            entries: [StatEntry::default(); StatKind::COUNT],
        }
    }

    #[inline]
    pub fn get(&self, stat: StatKind) -> StatEntry {
        self.entries[stat.as_index()]
    }

    #[inline]
    pub fn value(&self, stat: StatKind) -> f64 {
        self.entries[stat.as_index()].value
    }

    #[inline]
    pub fn is_conditional(&self, stat: StatKind) -> bool {
        self.entries[stat.as_index()].conditional
    }

    /// Adds `delta` to a stat.
    pub fn add(&mut self, stat: StatKind, delta: f64) {
        self.entries[stat.as_index()].value += delta;
    }

    /// Flags a stat as depending on an OR-branch choice.
    pub fn mark_conditional(&mut self, stat: StatKind) {
        self.entries[stat.as_index()].conditional = true;
    }

    /// Iterates stats in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, StatEntry)> + '_ {
        StatKind::all()
            .into_iter()
            .map(move |stat| (stat, self.entries[stat.as_index()]))
    }

    /// Iterates stats with a non-zero value or a conditional flag.
    pub fn touched(&self) -> impl Iterator<Item = (StatKind, StatEntry)> + '_ {
        self.iter()
            .filter(|(_, entry)| entry.value != 0.0 || entry.conditional)
    }
}

impl Default for StatSheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StatSheet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(StatKind::COUNT))?;
        for (stat, entry) in self.iter() {
            map.serialize_entry(stat.name(), &entry)?;
        }
        map.end()
    }
}
