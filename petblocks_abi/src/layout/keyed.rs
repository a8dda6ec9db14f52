//! Layout mirrors for the keyed release family.
//!
//! The registry class keeps a single registration object. Insertions go through its
//! [`add`](KeyedTypeRegistry::add) method; there is no symmetrical removal method, so
//! unregistration reaches the backing collection through its instance field
//! ([`fields::keyed::BACKING`](crate::layout::fields::keyed::BACKING)) and removes the entry
//! under the previously fabricated key.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{ClassHandle, NamespacedKey};

/// One registered entity type inside the keyed registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyedEntry {
    /// The numeric type id the entry was registered under.
    pub id: i32,
    /// The implementation class the entry maps to.
    pub class: ClassHandle,
}

/// The backing collection of the keyed registration object.
pub type KeyedBacking = RwLock<HashMap<NamespacedKey, KeyedEntry>>;

/// The keyed family's registration object.
///
/// Mirrors the host object reachable through the type-registry class's
/// [`REGISTRY`](crate::layout::fields::keyed::REGISTRY) static field.
#[derive(Clone, Debug, Default)]
pub struct KeyedTypeRegistry {
    entries: Arc<KeyedBacking>,
}

impl KeyedTypeRegistry {
    /// Create an empty registry object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The host's registration entry point: insert `class` under `id` and `key`.
    ///
    /// Registering a key that is already present replaces the existing entry, as the host
    /// does.
    ///
    /// # Panics
    /// Panics if the backing lock is poisoned.
    pub fn add(&self, id: i32, key: NamespacedKey, class: ClassHandle) {
        self.entries
            .write()
            .unwrap()
            .insert(key, KeyedEntry { id, class });
    }

    /// Shared handle to the backing collection.
    ///
    /// Host images hand this out when the registration object's backing field is looked up;
    /// the host itself offers no removal entry point.
    #[must_use]
    pub fn backing(&self) -> Arc<KeyedBacking> {
        Arc::clone(&self.entries)
    }

    /// The entry registered under `key`, if any.
    ///
    /// # Panics
    /// Panics if the backing lock is poisoned.
    #[must_use]
    pub fn get(&self, key: &NamespacedKey) -> Option<KeyedEntry> {
        self.entries.read().unwrap().get(key).cloned()
    }

    /// Number of registered entries.
    ///
    /// # Panics
    /// Panics if the backing lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Returns true if nothing is registered.
    ///
    /// # Panics
    /// Panics if the backing lock is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_get() {
        let registry = KeyedTypeRegistry::new();
        assert!(registry.is_empty());

        let key = NamespacedKey::new("PetBlocks", "Rabbit");
        let class = ClassHandle::new("nms.CustomRabbit");
        registry.add(101, key.clone(), class.clone());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&key), Some(KeyedEntry { id: 101, class }));
    }

    #[test]
    fn backing_is_shared() {
        let registry = KeyedTypeRegistry::new();
        let key = NamespacedKey::new("PetBlocks", "Rabbit");
        registry.add(101, key.clone(), ClassHandle::new("nms.CustomRabbit"));

        let backing = registry.backing();
        backing.write().unwrap().remove(&key);
        assert!(registry.is_empty());
    }

    #[test]
    fn add_replaces_existing_key() {
        let registry = KeyedTypeRegistry::new();
        let key = NamespacedKey::new("PetBlocks", "Rabbit");
        registry.add(101, key.clone(), ClassHandle::new("nms.CustomRabbit"));
        registry.add(102, key.clone(), ClassHandle::new("nms.OtherRabbit"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&key).unwrap().id, 102);
    }
}
