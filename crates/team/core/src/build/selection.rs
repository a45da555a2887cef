use std::collections::BTreeMap;

use tracing::debug;

use crate::effect::branch_count;

use super::InstanceId;

/// Addresses one effect line of one equipped instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionKey {
    pub instance: InstanceId,
    pub slot: usize,
}

impl SelectionKey {
    pub const fn new(instance: InstanceId, slot: usize) -> Self {
        Self { instance, slot }
    }
}

/// Active OR option per effect line.
///
/// Lines never toggled read as option 0; reading never inserts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selections: BTreeMap<SelectionKey, usize>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, key: SelectionKey) -> usize {
        self.selections.get(&key).copied().unwrap_or(0)
    }

    /// Advances the option of a line, modulo the option count of `effect_text`.
    ///
    /// The count is taken from the text at toggle time. Returns `false` without
    /// touching the store when the text offers no choice.
    pub fn toggle(&mut self, key: SelectionKey, effect_text: &str) -> bool {
        let count = branch_count(effect_text);
        if count < 2 {
            return false;
        }

        let current = self.selected(key);
        let current = if current < count { current } else { 0 };
        let next = (current + 1) % count;
        self.selections.insert(key, next);
        debug!(instance = key.instance.0, slot = key.slot, next, "branch toggled");
        true
    }

    /// Drops every selection of an instance.
    pub fn forget(&mut self, instance: InstanceId) {
        self.selections.retain(|key, _| key.instance != instance);
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO: &str = "5.00% to Blast Defense - OR - 5.00% to Strike Defense";
    const THREE: &str = "A+1% - OR - B+1% - or - C+1%";

    #[test]
    fn defaults_to_first_option_without_inserting() {
        let store = SelectionStore::new();
        assert_eq!(store.selected(SelectionKey::new(InstanceId(0), 0)), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn toggle_cycles_modulo_option_count() {
        let mut store = SelectionStore::new();
        let key = SelectionKey::new(InstanceId(1), 2);

        let seen: Vec<_> = (0..4)
            .map(|_| {
                store.toggle(key, THREE);
                store.selected(key)
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 0, 1]);

        assert!(store.toggle(key, TWO));
        assert_eq!(store.selected(key), 0);
    }

    #[test]
    fn toggle_without_marker_is_noop() {
        let mut store = SelectionStore::new();
        let key = SelectionKey::new(InstanceId(1), 0);
        assert!(!store.toggle(key, "Critical+5%"));
        assert!(store.is_empty());
    }

    #[test]
    fn forget_is_scoped_to_instance() {
        let mut store = SelectionStore::new();
        store.toggle(SelectionKey::new(InstanceId(1), 0), TWO);
        store.toggle(SelectionKey::new(InstanceId(2), 0), TWO);
        store.forget(InstanceId(1));
        assert_eq!(store.len(), 1);
        assert_eq!(store.selected(SelectionKey::new(InstanceId(2), 0)), 1);
    }
}
