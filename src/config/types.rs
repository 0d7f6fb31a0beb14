//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 语音配置
    #[serde(default)]
    pub speech: SpeechConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            speech: SpeechConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 语音配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeechConfig {
    /// 高级网络梯队（ElevenLabs）
    #[serde(default)]
    pub elevenlabs: ElevenLabsConfig,

    /// 免费网络梯队（翻译服务 TTS）
    #[serde(default)]
    pub translate: TranslateConfig,
}

/// 高级网络梯队配置
#[derive(Debug, Clone, Deserialize)]
pub struct ElevenLabsConfig {
    /// API 凭据
    /// 启动时解析一次；它的存在与否单独决定高级梯队是否启用
    #[serde(default)]
    pub api_key: Option<String>,

    /// 合成服务基础 URL
    #[serde(default = "default_elevenlabs_url")]
    pub base_url: String,

    /// 多语言语音 ID
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// 模型 ID
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_elevenlabs_url() -> String {
    "https://api.elevenlabs.io/v1/text-to-speech".to_string()
}

fn default_voice_id() -> String {
    "pNInz6obpgDQGcFmaJgB".to_string()
}

fn default_model_id() -> String {
    "eleven_multilingual_v2".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_elevenlabs_url(),
            voice_id: default_voice_id(),
            model_id: default_model_id(),
            timeout_secs: default_timeout(),
        }
    }
}

/// 免费网络梯队配置
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateConfig {
    /// 播放地址的基础 URL
    #[serde(default = "default_translate_url")]
    pub base_url: String,

    /// 目标语言代码
    #[serde(default = "default_translate_lang")]
    pub lang: String,
}

fn default_translate_url() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

fn default_translate_lang() -> String {
    "es".to_string()
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            base_url: default_translate_url(),
            lang: default_translate_lang(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否输出 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.speech.elevenlabs.api_key, None);
        assert_eq!(config.speech.elevenlabs.timeout_secs, 10);
        assert_eq!(config.speech.translate.lang, "es");
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
    }
}
