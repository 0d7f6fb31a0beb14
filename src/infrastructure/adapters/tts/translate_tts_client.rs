//! Translate TTS Client - 免费网络合成梯队
//!
//! 不需要凭据：把文本 URL 转义后拼成公共翻译服务的播放地址，
//! 交给宿主的音频播放能力。播放失败则交回编排器换下一梯队。

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::events::EventSink;
use crate::application::ports::{
    AudioPlayerPort, AudioSource, ProviderError, SpeechProviderPort, SpeechRequest,
};

/// 免费梯队配置
#[derive(Debug, Clone)]
pub struct TranslateTtsClientConfig {
    /// 播放地址的基础 URL
    pub base_url: String,
    /// 目标语言代码
    pub lang: String,
}

impl Default for TranslateTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translate.google.com/translate_tts".to_string(),
            lang: "es".to_string(),
        }
    }
}

/// Translate TTS 客户端
pub struct TranslateTtsClient {
    config: TranslateTtsClientConfig,
    player: Arc<dyn AudioPlayerPort>,
}

impl TranslateTtsClient {
    pub fn new(config: TranslateTtsClientConfig, player: Arc<dyn AudioPlayerPort>) -> Self {
        Self { config, player }
    }

    /// 从文本构造播放 URL（文本经 URL 转义）
    fn playback_url(&self, text: &str) -> String {
        format!(
            "{}?ie=UTF-8&tl={}&client=tw-ob&q={}&tk=1",
            self.config.base_url,
            self.config.lang,
            urlencoding::encode(text)
        )
    }
}

#[async_trait]
impl SpeechProviderPort for TranslateTtsClient {
    fn name(&self) -> &'static str {
        "translate-tts"
    }

    async fn attempt(
        &self,
        request: &SpeechRequest,
        events: &EventSink,
    ) -> Result<(), ProviderError> {
        events.started();

        let url = self.playback_url(&request.text);
        tracing::debug!(text_len = request.text.len(), "Playing free-tier synthesis URL");

        self.player
            .play(AudioSource::Url(url))
            .await
            .map_err(|e| ProviderError::PlaybackError(e.to_string()))?;

        events.completed();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::infrastructure::adapters::tts::{FakeAudioPlayer, FakeAudioPlayerConfig};

    fn sink() -> EventSink {
        let (sink, _rx) = EventSink::new(|_| {});
        sink
    }

    #[test]
    fn test_playback_url_escapes_text() {
        let client = TranslateTtsClient::new(
            TranslateTtsClientConfig::default(),
            Arc::new(FakeAudioPlayer::with_defaults()),
        );

        let url = client.playback_url("¿cómo estás?");
        assert!(url.starts_with("https://translate.google.com/translate_tts?ie=UTF-8&tl=es&client=tw-ob&q="));
        assert!(url.ends_with("&tk=1"));
        assert!(url.contains("%C2%BFc%C3%B3mo%20est%C3%A1s%3F"));
    }

    #[tokio::test]
    async fn test_success_plays_url() {
        let player = Arc::new(FakeAudioPlayer::with_defaults());
        let client = TranslateTtsClient::new(TranslateTtsClientConfig::default(), player.clone());

        let result = client.attempt(&SpeechRequest::new("hola"), &sink()).await;
        assert!(result.is_ok());

        let played = player.played().await;
        assert_eq!(played.len(), 1);
        assert!(matches!(&played[0], AudioSource::Url(url) if url.contains("q=hola")));
    }

    #[tokio::test]
    async fn test_playback_failure_maps_to_provider_error() {
        let player = Arc::new(FakeAudioPlayer::new(FakeAudioPlayerConfig {
            fail: true,
            ..Default::default()
        }));
        let client = TranslateTtsClient::new(TranslateTtsClientConfig::default(), player);

        let result = client.attempt(&SpeechRequest::new("hola"), &sink()).await;
        assert!(matches!(result, Err(ProviderError::PlaybackError(_))));
    }
}
