//! In-Memory Implementations - 内存适配器

mod preference_store;

pub use preference_store::InMemoryPreferenceStore;
