//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `VOCABLO_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `VOCABLO_SPEECH__ELEVENLABS__API_KEY=sk_xxx`
/// - `VOCABLO_SPEECH__ELEVENLABS__TIMEOUT_SECS=30`
/// - `VOCABLO_SPEECH__TRANSLATE__LANG=es`
///
/// # 返回
/// - `Ok(AppConfig)` - 成功加载的配置
/// - `Err(ConfigError)` - 加载失败
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    // api_key 没有默认值：缺省即禁用高级梯队
    builder = builder
        .set_default(
            "speech.elevenlabs.base_url",
            "https://api.elevenlabs.io/v1/text-to-speech",
        )?
        .set_default("speech.elevenlabs.voice_id", "pNInz6obpgDQGcFmaJgB")?
        .set_default("speech.elevenlabs.model_id", "eleven_multilingual_v2")?
        .set_default("speech.elevenlabs.timeout_secs", 10)?
        .set_default(
            "speech.translate.base_url",
            "https://translate.google.com/translate_tts",
        )?
        .set_default("speech.translate.lang", "es")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: VOCABLO_
    // 层级分隔符: __ (双下划线)
    // 例如: VOCABLO_SPEECH__ELEVENLABS__API_KEY=sk_xxx
    builder = builder.add_source(
        Environment::with_prefix("VOCABLO")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.speech.elevenlabs.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "ElevenLabs base URL cannot be empty".to_string(),
        ));
    }

    if config.speech.elevenlabs.voice_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "ElevenLabs voice id cannot be empty".to_string(),
        ));
    }

    if config.speech.elevenlabs.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Synthesis timeout cannot be 0".to_string(),
        ));
    }

    if config.speech.translate.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Translate TTS base URL cannot be empty".to_string(),
        ));
    }

    if config.speech.translate.lang.is_empty() {
        return Err(ConfigError::ValidationError(
            "Translate TTS language cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
///
/// 凭据只打印是否配置，从不打印内容
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!(
        "ElevenLabs credential: {}",
        if config.speech.elevenlabs.api_key.is_some() {
            "configured"
        } else {
            "not configured"
        }
    );
    tracing::info!("ElevenLabs URL: {}", config.speech.elevenlabs.base_url);
    tracing::info!("ElevenLabs Voice: {}", config.speech.elevenlabs.voice_id);
    tracing::info!("Synthesis Timeout: {}s", config.speech.elevenlabs.timeout_secs);
    tracing::info!("Translate TTS URL: {}", config.speech.translate.base_url);
    tracing::info!("Translate TTS Language: {}", config.speech.translate.lang);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
