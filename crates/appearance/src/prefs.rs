//! Persisted user preferences.
//!
//! One `StoreEntry` per preference, declared once here; the repository is a
//! thin shared handle over the process-wide key-value store.

use std::rc::Rc;

use shade_store::{KeyValueStore, StoreEntry};

use crate::appearance::Appearance;

/// Appearance preference entry. Defaults to following the OS.
pub const APPEARANCE: StoreEntry<Appearance> =
    StoreEntry::new("appearance", Appearance::codec(), Appearance::System);

/// Shared access to the persisted preferences.
#[derive(Clone)]
pub struct PreferencesRepository {
    store: Rc<dyn KeyValueStore>,
}

impl PreferencesRepository {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn appearance(&self) -> Appearance {
        APPEARANCE.load(&*self.store)
    }

    pub fn set_appearance(&self, value: Appearance) {
        APPEARANCE.store(&*self.store, &value);
    }
}
