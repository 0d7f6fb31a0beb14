//! Preference Store Port - 偏好持久化抽象
//!
//! 外部键值存储。核心层在挑选语音时读取偏好、通过显式
//! setter 写入，从不删除或过期该值。

/// 语音偏好的存储键
pub const PREFERRED_VOICE_KEY: &str = "preferred-spanish-voice";

/// Preference Store Port
pub trait PreferenceStorePort: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}
