use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::OnceCell;

use crate::dal::model::secret_value::SecretValue;

type Slot = Arc<OnceCell<SecretValue>>;

/// Insert-once store of raw secret values, one slot per identifier.
///
/// A slot is created on first request and filled by the first fetch that
/// succeeds. Concurrent requests for an empty slot wait on the same
/// initialisation, so only one fetch is in flight per identifier. Filled
/// slots are never replaced or removed; an empty slot is dropped once its
/// fetch fails and nobody else waits on it.
#[derive(Default)]
pub struct SecretCache {
    slots: Mutex<HashMap<String, Slot>>,
}

impl SecretCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn slot(&self, secret_id: &str) -> Slot {
        let mut slots = self.slots.lock();
        match slots.get(secret_id) {
            Some(slot) => Arc::clone(slot),
            None => {
                let slot = Slot::default();
                slots.insert(secret_id.to_string(), Arc::clone(&slot));
                slot
            }
        }
    }

    /// Drops `slot` if it is still empty and held only by the map and the
    /// caller. Slots other requests are waiting on stay in place.
    pub(crate) fn release_unfilled(&self, secret_id: &str, slot: &Slot) {
        let mut slots = self.slots.lock();
        let idle = slots.get(secret_id).is_some_and(|current| {
            Arc::ptr_eq(current, slot) && !current.initialized() && Arc::strong_count(current) == 2
        });
        if idle {
            slots.remove(secret_id);
        }
    }

    pub fn get(&self, secret_id: &str) -> Option<SecretValue> {
        self.slots.lock().get(secret_id)?.get().cloned()
    }

    pub fn contains(&self, secret_id: &str) -> bool {
        self.get(secret_id).is_some()
    }

    /// Number of identifiers with a cached value.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
