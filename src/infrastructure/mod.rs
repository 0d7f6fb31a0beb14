//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现，并负责组装默认供应商链

pub mod adapters;
pub mod memory;

use std::sync::Arc;

use crate::application::ports::{
    AudioPlayerPort, PreferenceStorePort, ProviderError, SpeechProviderPort, SynthesisHostPort,
};
use crate::application::SpeechOrchestrator;
use crate::config::SpeechConfig;

pub use adapters::{
    ElevenLabsClient, ElevenLabsClientConfig, FakeAudioPlayer, FakeAudioPlayerConfig,
    FakeSynthesisHost, FakeSynthesisHostConfig, LocalSynthesisProvider, TranslateTtsClient,
    TranslateTtsClientConfig,
};
pub use memory::InMemoryPreferenceStore;

/// 按配置组装默认供应商链并构造编排器
///
/// 链的优先级固定：高级网络合成 → 免费网络合成 → 本地合成。
/// 凭据是否存在只决定第一梯队是否可用，不改变链的结构。
pub fn build_orchestrator(
    config: &SpeechConfig,
    synthesis_host: Arc<dyn SynthesisHostPort>,
    audio_player: Arc<dyn AudioPlayerPort>,
    preference_store: Arc<dyn PreferenceStorePort>,
) -> Result<SpeechOrchestrator, ProviderError> {
    let elevenlabs_config = ElevenLabsClientConfig {
        api_key: config.elevenlabs.api_key.clone(),
        base_url: config.elevenlabs.base_url.clone(),
        voice_id: config.elevenlabs.voice_id.clone(),
        model_id: config.elevenlabs.model_id.clone(),
        timeout_secs: config.elevenlabs.timeout_secs,
    };
    let has_credential = elevenlabs_config.api_key.is_some();

    let translate_config = TranslateTtsClientConfig {
        base_url: config.translate.base_url.clone(),
        lang: config.translate.lang.clone(),
    };

    let providers: Vec<Arc<dyn SpeechProviderPort>> = vec![
        Arc::new(ElevenLabsClient::new(
            elevenlabs_config,
            audio_player.clone(),
        )?),
        Arc::new(TranslateTtsClient::new(translate_config, audio_player)),
        Arc::new(LocalSynthesisProvider::new(
            synthesis_host.clone(),
            preference_store.clone(),
        )),
    ];

    Ok(SpeechOrchestrator::new(
        providers,
        synthesis_host,
        preference_store,
        has_credential,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::application::events::SpeechCallbacks;
    use crate::application::ports::SpeechRequest;
    use crate::domain::voice::VoiceDescriptor;

    fn counting_callbacks() -> (
        SpeechCallbacks,
        Arc<AtomicUsize>,
        Arc<AtomicUsize>,
        Arc<AtomicUsize>,
    ) {
        let started = Arc::new(AtomicUsize::new(0));
        let completed = Arc::new(AtomicUsize::new(0));
        let failed = Arc::new(AtomicUsize::new(0));
        let s = started.clone();
        let c = completed.clone();
        let f = failed.clone();
        let callbacks = SpeechCallbacks::new()
            .on_start(move || {
                s.fetch_add(1, Ordering::SeqCst);
            })
            .on_end(move || {
                c.fetch_add(1, Ordering::SeqCst);
            })
            .on_error(move |_| {
                f.fetch_add(1, Ordering::SeqCst);
            });
        (callbacks, started, completed, failed)
    }

    #[tokio::test]
    async fn test_free_tier_failure_falls_through_to_local() {
        // 无凭据 + 免费梯队播放失败 + 宿主支持本地合成：
        // 整个请求 started / completed 各恰好一次
        let config = SpeechConfig::default();
        let player = Arc::new(FakeAudioPlayer::new(FakeAudioPlayerConfig {
            fail: true,
            ..Default::default()
        }));
        let host = Arc::new(FakeSynthesisHost::new(FakeSynthesisHostConfig {
            voices: vec![VoiceDescriptor::new("Monica", "es-ES")],
            ..Default::default()
        }));
        let orchestrator = build_orchestrator(
            &config,
            host.clone(),
            player,
            Arc::new(InMemoryPreferenceStore::new()),
        )
        .unwrap();

        assert!(!orchestrator.has_premium_credential());

        let (callbacks, started, completed, failed) = counting_callbacks();
        orchestrator
            .speak(SpeechRequest::new("hola"), callbacks)
            .await;
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        assert_eq!(started.load(Ordering::SeqCst), 1);
        assert_eq!(completed.load(Ordering::SeqCst), 1);
        assert_eq!(failed.load(Ordering::SeqCst), 0);
        assert_eq!(host.spoken().len(), 1);
    }

    #[tokio::test]
    async fn test_all_tiers_failing_surfaces_single_error() {
        let config = SpeechConfig::default();
        let player = Arc::new(FakeAudioPlayer::new(FakeAudioPlayerConfig {
            fail: true,
            ..Default::default()
        }));
        let host = Arc::new(FakeSynthesisHost::new(FakeSynthesisHostConfig {
            supported: false,
            ..Default::default()
        }));
        let orchestrator = build_orchestrator(
            &config,
            host,
            player,
            Arc::new(InMemoryPreferenceStore::new()),
        )
        .unwrap();

        let (callbacks, _started, completed, failed) = counting_callbacks();
        orchestrator
            .speak(SpeechRequest::new("hola"), callbacks)
            .await;
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        assert_eq!(completed.load(Ordering::SeqCst), 0);
        assert_eq!(failed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_free_tier_success_never_reaches_local() {
        let config = SpeechConfig::default();
        let player = Arc::new(FakeAudioPlayer::with_defaults());
        let host = Arc::new(FakeSynthesisHost::with_defaults());
        let orchestrator = build_orchestrator(
            &config,
            host.clone(),
            player,
            Arc::new(InMemoryPreferenceStore::new()),
        )
        .unwrap();

        let (callbacks, started, completed, failed) = counting_callbacks();
        orchestrator
            .speak(SpeechRequest::new("hola"), callbacks)
            .await;
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        assert_eq!(started.load(Ordering::SeqCst), 1);
        assert_eq!(completed.load(Ordering::SeqCst), 1);
        assert_eq!(failed.load(Ordering::SeqCst), 0);
        assert!(host.spoken().is_empty());
    }
}
