use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::geometry::Geometry;

use super::cell::CellId;
use super::data::CellData;

slotmap::new_key_type! {
    /// Storage slot of a record. Never leaves the arena.
    struct SlotKey;
}

/// Record storage of a complex.
///
/// Records live in a slot map; the stable [`CellId`] of each cell maps to
/// its slot. Slot keys are reused freely, cell ids are not.
#[derive(Debug, Clone)]
pub(super) struct Arena<G: Geometry> {
    slots: SlotMap<SlotKey, CellData<G>>,
    keys: BTreeMap<CellId, SlotKey>,
}

impl<G: Geometry> Default for Arena<G> {
    fn default() -> Self {
        Self {
            slots: SlotMap::with_key(),
            keys: BTreeMap::new(),
        }
    }
}

impl<G: Geometry> Arena<G> {
    pub(super) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub(super) fn contains(&self, id: CellId) -> bool {
        self.keys.contains_key(&id)
    }

    pub(super) fn get(&self, id: CellId) -> Option<&CellData<G>> {
        self.keys.get(&id).and_then(|&key| self.slots.get(key))
    }

    pub(super) fn get_mut(&mut self, id: CellId) -> Option<&mut CellData<G>> {
        let key = *self.keys.get(&id)?;
        self.slots.get_mut(key)
    }

    /// Stores `data` under `id`, which must not be in use.
    pub(super) fn insert(&mut self, id: CellId, data: CellData<G>) {
        let key = self.slots.insert(data);
        if let Some(stale) = self.keys.insert(id, key) {
            self.slots.remove(stale);
        }
    }

    pub(super) fn remove(&mut self, id: CellId) -> Option<CellData<G>> {
        let key = self.keys.remove(&id)?;
        self.slots.remove(key)
    }

    /// Keeps the cells for which `keep` returns `true`.
    pub(super) fn retain(&mut self, mut keep: impl FnMut(CellId) -> bool) {
        let slots = &mut self.slots;
        self.keys.retain(|&id, &mut key| {
            let kept = keep(id);
            if !kept {
                slots.remove(key);
            }
            kept
        });
    }

    /// Iterates over the cells in increasing id order.
    pub(super) fn iter(&self) -> impl Iterator<Item = (CellId, &CellData<G>)> + '_ {
        self.keys
            .iter()
            .filter_map(|(&id, &key)| self.slots.get(key).map(|data| (id, data)))
    }

    pub(super) fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.keys.keys().copied()
    }

    /// Returns the largest id in use.
    pub(super) fn last_id(&self) -> Option<CellId> {
        self.keys.last_key_value().map(|(&id, _)| id)
    }
}

impl<G: Geometry> FromIterator<(CellId, CellData<G>)> for Arena<G> {
    fn from_iter<I: IntoIterator<Item = (CellId, CellData<G>)>>(iter: I) -> Self {
        let mut arena = Self::default();
        for (id, data) in iter {
            arena.insert(id, data);
        }
        arena
    }
}
