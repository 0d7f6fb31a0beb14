//! Fake Synthesis Host - 用于测试的本地合成宿主
//!
//! 不实际朗读：按配置回放 Begin → Finish / Error 事件流，
//! 记录取消次数与朗读过的整句，新朗读会抢占上一条

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::application::ports::{SynthesisError, SynthesisHostPort, Utterance, UtteranceEvent};
use crate::domain::voice::VoiceDescriptor;

/// Fake Synthesis Host 配置
#[derive(Debug, Clone)]
pub struct FakeSynthesisHostConfig {
    /// 宿主是否暴露本地合成能力
    pub supported: bool,
    /// 枚举返回的语音列表
    pub voices: Vec<VoiceDescriptor>,
    /// 是否以 Error 事件结束
    pub fail: bool,
    /// Begin 与终结事件之间的间隔（毫秒）
    pub delay_ms: u64,
}

impl Default for FakeSynthesisHostConfig {
    fn default() -> Self {
        Self {
            supported: true,
            voices: Vec::new(),
            fail: false,
            delay_ms: 0,
        }
    }
}

/// Fake Synthesis Host
pub struct FakeSynthesisHost {
    config: FakeSynthesisHostConfig,
    cancels: AtomicUsize,
    spoken: Mutex<Vec<Utterance>>,
    /// 在播朗读的任务句柄，新朗读或 cancel 会中止它
    active: Mutex<Option<JoinHandle<()>>>,
}

impl FakeSynthesisHost {
    pub fn new(config: FakeSynthesisHostConfig) -> Self {
        Self {
            config,
            cancels: AtomicUsize::new(0),
            spoken: Mutex::new(Vec::new()),
            active: Mutex::new(None),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeSynthesisHostConfig::default())
    }

    /// 被取消的次数
    pub fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }

    /// 朗读过的整句快照
    pub fn spoken(&self) -> Vec<Utterance> {
        self.spoken
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn abort_active(&self) {
        if let Ok(mut guard) = self.active.lock() {
            if let Some(handle) = guard.take() {
                handle.abort();
            }
        }
    }
}

#[async_trait]
impl SynthesisHostPort for FakeSynthesisHost {
    fn is_supported(&self) -> bool {
        self.config.supported
    }

    fn voices(&self) -> Vec<VoiceDescriptor> {
        self.config.voices.clone()
    }

    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
        self.abort_active();
    }

    async fn speak(
        &self,
        utterance: Utterance,
    ) -> Result<mpsc::Receiver<UtteranceEvent>, SynthesisError> {
        if !self.config.supported {
            return Err(SynthesisError::Unsupported);
        }

        tracing::debug!(
            text_len = utterance.text.len(),
            lang = %utterance.lang,
            "FakeSynthesisHost: speaking"
        );

        if let Ok(mut guard) = self.spoken.lock() {
            guard.push(utterance);
        }

        // 同一时刻至多一条朗读
        self.abort_active();

        let (tx, rx) = mpsc::channel(4);
        let fail = self.config.fail;
        let delay_ms = self.config.delay_ms;

        let handle = tokio::spawn(async move {
            let _ = tx.send(UtteranceEvent::Begin).await;
            if delay_ms > 0 {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
            }
            let terminal = if fail {
                UtteranceEvent::Error("simulated synthesis failure".to_string())
            } else {
                UtteranceEvent::Finish
            };
            let _ = tx.send(terminal).await;
        });

        if let Ok(mut guard) = self.active.lock() {
            *guard = Some(handle);
        }

        Ok(rx)
    }
}
