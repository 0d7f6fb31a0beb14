//! ElevenLabs TTS Client - 高级网络合成梯队
//!
//! 实现 SpeechProviderPort trait，通过 HTTP 调用 ElevenLabs 合成服务
//!
//! 外部 API:
//! POST https://api.elevenlabs.io/v1/text-to-speech/{voice_id}
//! Request: {"text": "...", "model_id": "...", "voice_settings": {...}}  (JSON)
//! Response: audio/mpeg binary
//!
//! 凭据缺失时本梯队不可用；任何失败（非成功状态、网络错误、
//! 播放错误）都交回编排器换下一梯队，不直接终结请求

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::application::events::EventSink;
use crate::application::ports::{
    AudioPlayerPort, AudioSource, ProviderError, SpeechProviderPort, SpeechRequest,
};

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SynthesisHttpRequest<'a> {
    /// 要合成的文本
    text: &'a str,
    /// 模型 ID
    model_id: &'a str,
    /// 语音参数
    voice_settings: VoiceSettings,
}

/// 固定的语音参数旋钮，不暴露给用户调节
#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
    style: f32,
    use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

/// ElevenLabs 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenLabsClientConfig {
    /// API 凭据，None 表示本梯队不可用
    pub api_key: Option<String>,
    /// 合成服务基础 URL
    pub base_url: String,
    /// 多语言语音 ID
    pub voice_id: String,
    /// 模型 ID
    pub model_id: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ElevenLabsClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.elevenlabs.io/v1/text-to-speech".to_string(),
            voice_id: "pNInz6obpgDQGcFmaJgB".to_string(),
            model_id: "eleven_multilingual_v2".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ElevenLabsClientConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// ElevenLabs TTS 客户端
pub struct ElevenLabsClient {
    client: Client,
    config: ElevenLabsClientConfig,
    player: Arc<dyn AudioPlayerPort>,
}

impl ElevenLabsClient {
    /// 创建新的 ElevenLabs 客户端
    pub fn new(
        config: ElevenLabsClientConfig,
        player: Arc<dyn AudioPlayerPort>,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            config,
            player,
        })
    }

    /// 获取合成 URL
    fn synthesis_url(&self) -> String {
        format!("{}/{}", self.config.base_url, self.config.voice_id)
    }
}

#[async_trait]
impl SpeechProviderPort for ElevenLabsClient {
    fn name(&self) -> &'static str {
        "elevenlabs"
    }

    async fn attempt(
        &self,
        request: &SpeechRequest,
        events: &EventSink,
    ) -> Result<(), ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::Unavailable("no API credential".to_string()))?;

        events.started();

        let http_request = SynthesisHttpRequest {
            text: &request.text,
            model_id: &self.config.model_id,
            voice_settings: VoiceSettings::default(),
        };

        tracing::debug!(
            url = %self.synthesis_url(),
            text_len = request.text.len(),
            "Sending premium synthesis request"
        );

        let response = self
            .client
            .post(self.synthesis_url())
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", api_key)
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else if e.is_connect() {
                    ProviderError::NetworkError(format!(
                        "Cannot connect to synthesis service: {}",
                        e
                    ))
                } else {
                    ProviderError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::debug!(audio_size = audio_data.len(), "Premium synthesis completed");

        self.player
            .play(AudioSource::Bytes {
                data: audio_data,
                mime: "audio/mpeg".to_string(),
            })
            .await
            .map_err(|e| ProviderError::PlaybackError(e.to_string()))?;

        events.completed();
        Ok(())
    }
}
