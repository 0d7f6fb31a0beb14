//! Speech Orchestrator - 朗读编排器
//!
//! 把一段西班牙语文本交给当前最优的合成机制，按严格优先级
//! 遍历供应商链（责任链），单个梯队的失败只是一次切换，
//! 链耗尽才通过事件上报唯一一次失败。
//!
//! 依赖全部显式注入，核心层没有任何进程级隐藏状态。

use std::sync::Arc;

use uuid::Uuid;

use crate::application::error::{ProviderAttempt, SpeechFailure};
use crate::application::events::{EventSink, SpeechCallbacks};
use crate::application::ports::{
    PreferenceStorePort, SpeechProviderPort, SpeechRequest, SynthesisHostPort,
    PREFERRED_VOICE_KEY,
};

/// 朗读编排器
pub struct SpeechOrchestrator {
    /// 供应商链，按优先级从高到低
    providers: Vec<Arc<dyn SpeechProviderPort>>,
    synthesis_host: Arc<dyn SynthesisHostPort>,
    preference_store: Arc<dyn PreferenceStorePort>,
    /// 高级网络梯队的凭据是否已配置（探测用）
    has_credential: bool,
}

impl SpeechOrchestrator {
    /// 用显式供应商链构造
    ///
    /// 默认链由 infrastructure 层组装；测试可注入任意策略列表
    pub fn new(
        providers: Vec<Arc<dyn SpeechProviderPort>>,
        synthesis_host: Arc<dyn SynthesisHostPort>,
        preference_store: Arc<dyn PreferenceStorePort>,
        has_credential: bool,
    ) -> Self {
        Self {
            providers,
            synthesis_host,
            preference_store,
            has_credential,
        }
    }

    /// 朗读一段文本
    ///
    /// 在某个梯队启动播放（或链耗尽）后即返回，不等待播放
    /// 结束；从不返回错误，所有失败都走 on_error 回调，
    /// 外层 UI 不允许因语音失败而崩溃
    pub async fn speak(&self, request: SpeechRequest, callbacks: SpeechCallbacks) {
        let (sink, initiated) = EventSink::from_callbacks(callbacks);
        let providers = self.providers.clone();
        let request_id = Uuid::new_v4();

        tracing::debug!(
            request_id = %request_id,
            text_len = request.text.len(),
            providers = providers.len(),
            "speech request accepted"
        );

        tokio::spawn(run_chain(providers, request, sink, request_id));

        // 任意一个事件（启动或终结）都会触发该信号
        let _ = initiated.await;
    }

    /// 宿主是否暴露本地合成能力
    ///
    /// 供调用方决定是否展示语音 UI，编排器内部不用它跳过梯队
    pub fn is_local_synthesis_supported(&self) -> bool {
        self.synthesis_host.is_supported()
    }

    /// 高级网络梯队的凭据是否已配置
    pub fn has_premium_credential(&self) -> bool {
        self.has_credential
    }

    /// 是否有任何可用的语音机制
    ///
    /// 免费网络梯队被假定始终可达，因此恒为 true。
    /// 这是一个已知的乐观假设，不是保证。
    pub fn is_speech_available(&self) -> bool {
        true
    }

    /// 读取已持久化的偏好语音名
    pub fn preferred_voice(&self) -> Option<String> {
        self.preference_store.get(PREFERRED_VOICE_KEY)
    }

    /// 持久化偏好语音名（供 UI 使用）
    pub fn set_preferred_voice(&self, name: &str) {
        self.preference_store.set(PREFERRED_VOICE_KEY, name);
        tracing::debug!(voice = name, "preferred voice updated");
    }
}

/// 按优先级遍历供应商链，直到服务成功或链耗尽
async fn run_chain(
    providers: Vec<Arc<dyn SpeechProviderPort>>,
    request: SpeechRequest,
    sink: EventSink,
    request_id: Uuid,
) {
    let mut attempts = Vec::new();

    for provider in providers {
        match provider.attempt(&request, &sink).await {
            Ok(()) => {
                tracing::debug!(
                    request_id = %request_id,
                    provider = provider.name(),
                    "speech request served"
                );
                return;
            }
            Err(error) => {
                tracing::debug!(
                    request_id = %request_id,
                    provider = provider.name(),
                    error = %error,
                    "speech provider failed, falling through"
                );
                attempts.push(ProviderAttempt {
                    provider: provider.name(),
                    error: error.to_string(),
                });
            }
        }
    }

    tracing::warn!(
        request_id = %request_id,
        attempts = attempts.len(),
        "all speech providers exhausted"
    );
    sink.failed(SpeechFailure::Exhausted { attempts });
}
