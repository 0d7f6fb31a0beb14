//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};

/// 宿主枚举出的一个语音描述
///
/// 由宿主的语音枚举能力提供，核心层只做过滤、打分与挑选，
/// 从不自行创建
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    /// 显示名称
    pub name: String,
    /// 语言标签，如 "es-ES"
    pub language_tag: String,
}

impl VoiceDescriptor {
    pub fn new(name: impl Into<String>, language_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language_tag: language_tag.into(),
        }
    }
}

/// 朗读参数
///
/// 默认语速 0.7，刻意放慢以便听清发音
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeechParams {
    /// 语速 (0.1 - 10.0)
    pub rate: f32,
    /// 音调 (0.0 - 2.0)
    pub pitch: f32,
    /// 音量 (0.0 - 1.0)
    pub volume: f32,
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self {
            rate: 0.7,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

impl SpeechParams {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(0.1..=10.0).contains(&self.rate) {
            return Err("语速必须在 0.1 到 10.0 之间");
        }
        if !(0.0..=2.0).contains(&self.pitch) {
            return Err("音调必须在 0.0 到 2.0 之间");
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err("音量必须在 0.0 到 1.0 之间");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SpeechParams::default();
        assert_eq!(params.rate, 0.7);
        assert_eq!(params.pitch, 1.0);
        assert_eq!(params.volume, 1.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_params_out_of_range() {
        let mut params = SpeechParams::default();
        params.rate = 0.0;
        assert!(params.validate().is_err());

        let mut params = SpeechParams::default();
        params.pitch = 3.0;
        assert!(params.validate().is_err());

        let mut params = SpeechParams::default();
        params.volume = 1.5;
        assert!(params.validate().is_err());
    }
}
