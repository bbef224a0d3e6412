// Typed key-value persistence

pub mod codec;
pub mod entry;
pub mod persistence;
pub mod store;

pub use codec::Codec;
pub use entry::StoreEntry;
pub use persistence::FileStore;
pub use store::{KeyValueStore, MemoryStore};
