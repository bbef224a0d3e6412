//! Store entries: a persistence key bound to a codec and a default.

use crate::codec::Codec;
use crate::store::KeyValueStore;

/// A named, typed binding between a persistence key and a default value.
///
/// One entry is declared per persisted setting, construct-once at module
/// scope. The entry owns no mutable state of its own; everything lives in
/// the backing store, and distinct entries own disjoint keys by convention.
pub struct StoreEntry<T> {
    key: &'static str,
    codec: Codec<T>,
    default: T,
}

impl<T: Clone> StoreEntry<T> {
    pub const fn new(key: &'static str, codec: Codec<T>, default: T) -> Self {
        Self { key, codec, default }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The fallback returned when the store holds no usable value.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Read this entry from `store`.
    ///
    /// Total: a missing key and a value the codec cannot decode both fall
    /// back to the default. Corrupt stored data can silently revert a
    /// setting, never fail the caller.
    pub fn load(&self, store: &dyn KeyValueStore) -> T {
        match store.get(self.key) {
            Some(raw) => self
                .codec
                .deserialize(&raw)
                .unwrap_or_else(|| self.default.clone()),
            None => self.default.clone(),
        }
    }

    /// Write `value` to `store`.
    ///
    /// If the codec cannot represent the value, the write is skipped with a
    /// warning and whatever the store held before survives.
    pub fn store(&self, store: &dyn KeyValueStore, value: &T) {
        match self.codec.serialize(value) {
            Some(raw) => store.set(self.key, &raw),
            None => log::warn!("failed to serialize value. key: {}", self.key),
        }
    }
}
