//! Synthesis Host Port - 本地语音合成抽象
//!
//! 宿主的本地朗读能力：语音枚举、整句朗读、取消。
//! 同一时刻至多一条本地朗读在播，新请求抢占旧请求。

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::domain::voice::{SpeechParams, VoiceDescriptor};

/// 一条待朗读的整句
#[derive(Debug, Clone)]
pub struct Utterance {
    pub text: String,
    /// 语言标签，选中语音时跟随其标签，否则回落 es-ES
    pub lang: String,
    pub params: SpeechParams,
    /// 选中的语音，None 表示交给宿主默认
    pub voice: Option<VoiceDescriptor>,
}

/// 朗读生命周期事件，对应宿主的 begin / finish / error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtteranceEvent {
    Begin,
    Finish,
    Error(String),
}

/// 本地合成错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Local synthesis not supported")]
    Unsupported,

    #[error("Synthesis failed: {0}")]
    Failed(String),
}

/// Synthesis Host Port
#[async_trait]
pub trait SynthesisHostPort: Send + Sync {
    /// 宿主是否暴露本地合成能力
    fn is_supported(&self) -> bool;

    /// 枚举宿主当前可用的语音
    fn voices(&self) -> Vec<VoiceDescriptor>;

    /// 取消当前朗读（若有）
    fn cancel(&self);

    /// 开始朗读，返回生命周期事件流
    ///
    /// 事件流以 Finish 或 Error 结束；流意外关闭视为失败
    async fn speak(
        &self,
        utterance: Utterance,
    ) -> Result<mpsc::Receiver<UtteranceEvent>, SynthesisError>;
}
