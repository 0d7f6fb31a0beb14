//! Local Synthesis Provider - 本地合成梯队
//!
//! 回退链的最后一级，包装宿主的本地朗读能力：
//! - 先取消在播的朗读（同一时刻至多一条，新请求抢占）
//! - 按偏好/打分挑选西语语音，语言标签跟随选中语音
//! - 宿主的 begin / finish / error 事件直接映射到请求生命周期
//!
//! 宿主完全没有本地合成能力时本梯队不可用，由编排器把
//! 链耗尽作为整体失败上报。

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::events::EventSink;
use crate::application::ports::{
    PreferenceStorePort, ProviderError, SpeechProviderPort, SpeechRequest, SynthesisError,
    SynthesisHostPort, Utterance, UtteranceEvent, PREFERRED_VOICE_KEY,
};
use crate::domain::voice::{best_spanish_voice, spanish_candidates, VoiceDescriptor};

/// 没有选中语音时的语言标签
const DEFAULT_LANG: &str = "es-ES";

/// 本地合成供应商
pub struct LocalSynthesisProvider {
    host: Arc<dyn SynthesisHostPort>,
    preference_store: Arc<dyn PreferenceStorePort>,
}

impl LocalSynthesisProvider {
    pub fn new(
        host: Arc<dyn SynthesisHostPort>,
        preference_store: Arc<dyn PreferenceStorePort>,
    ) -> Self {
        Self {
            host,
            preference_store,
        }
    }

    /// 为本次请求挑选语音
    ///
    /// 调用方指定的语音名优先（仍须是西语候选），
    /// 否则按持久化偏好 + 打分表挑选
    fn select_voice(&self, request: &SpeechRequest) -> Option<VoiceDescriptor> {
        let voices = self.host.voices();

        if let Some(name) = request.voice_name.as_deref() {
            if let Some(voice) = spanish_candidates(&voices)
                .into_iter()
                .find(|v| v.name == name)
            {
                return Some(voice.clone());
            }
        }

        let preferred = self.preference_store.get(PREFERRED_VOICE_KEY);
        best_spanish_voice(&voices, preferred.as_deref()).cloned()
    }
}

#[async_trait]
impl SpeechProviderPort for LocalSynthesisProvider {
    fn name(&self) -> &'static str {
        "local-synthesis"
    }

    async fn attempt(
        &self,
        request: &SpeechRequest,
        events: &EventSink,
    ) -> Result<(), ProviderError> {
        if !self.host.is_supported() {
            return Err(ProviderError::Unavailable(
                "local synthesis not supported".to_string(),
            ));
        }

        // 抢占在播的朗读
        self.host.cancel();

        let voice = self.select_voice(request);
        let lang = voice
            .as_ref()
            .map(|v| v.language_tag.clone())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LANG.to_string());

        tracing::debug!(
            voice = voice.as_ref().map(|v| v.name.as_str()).unwrap_or("<default>"),
            lang = %lang,
            "Starting local utterance"
        );

        let utterance = Utterance {
            text: request.text.clone(),
            lang,
            params: request.params,
            voice,
        };

        let mut utterance_events = self.host.speak(utterance).await.map_err(|e| match e {
            SynthesisError::Unsupported => {
                ProviderError::Unavailable("local synthesis not supported".to_string())
            }
            SynthesisError::Failed(msg) => ProviderError::SynthesisError(msg),
        })?;

        while let Some(event) = utterance_events.recv().await {
            match event {
                UtteranceEvent::Begin => events.started(),
                UtteranceEvent::Finish => {
                    events.completed();
                    return Ok(());
                }
                UtteranceEvent::Error(msg) => return Err(ProviderError::SynthesisError(msg)),
            }
        }

        Err(ProviderError::SynthesisError(
            "utterance event stream closed".to_string(),
        ))
    }
}
