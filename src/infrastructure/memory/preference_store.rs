//! In-Memory Preference Store Implementation

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::PreferenceStorePort;

/// 内存键值偏好存储
///
/// 浏览器宿主里这对应 localStorage；测试与无持久化场景
/// 直接使用本实现
pub struct InMemoryPreferenceStore {
    entries: DashMap<String, String>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStorePort for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        tracing::debug!(key = key, "preference updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = InMemoryPreferenceStore::new();
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = InMemoryPreferenceStore::new();
        store.set("voice", "Microsoft Helena");
        assert_eq!(store.get("voice").as_deref(), Some("Microsoft Helena"));
    }

    #[test]
    fn test_set_overwrites() {
        let store = InMemoryPreferenceStore::new();
        store.set("voice", "Monica");
        store.set("voice", "Diego");
        assert_eq!(store.get("voice").as_deref(), Some("Diego"));
    }
}
