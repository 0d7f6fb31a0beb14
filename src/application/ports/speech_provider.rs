//! Speech Provider Port - 朗读供应商抽象
//!
//! 回退链上的一个梯队。编排器按优先级逐个调用 attempt，
//! 直到某个供应商服务成功或链耗尽。

use async_trait::async_trait;
use thiserror::Error;

use crate::application::events::EventSink;
use crate::domain::voice::SpeechParams;

/// 供应商级错误
///
/// 对单个请求而言都是非终结的：编排器吞掉错误并切换到
/// 下一个供应商，只有链耗尽才对外暴露失败
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Playback error: {0}")]
    PlaybackError(String),

    #[error("Synthesis error: {0}")]
    SynthesisError(String),
}

/// 一次朗读请求
///
/// 瞬态对象，只在一次播放尝试期间存在
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// 要朗读的西班牙语文本
    pub text: String,
    /// 朗读参数（语速/音调/音量）
    pub params: SpeechParams,
    /// 调用方指定的语音名（可选，仅本地合成使用）
    pub voice_name: Option<String>,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: SpeechParams::default(),
            voice_name: None,
        }
    }

    pub fn with_params(mut self, params: SpeechParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_voice_name(mut self, name: impl Into<String>) -> Self {
        self.voice_name = Some(name.into());
        self
    }
}

/// Speech Provider Port
///
/// 回退链的统一策略接口
#[async_trait]
pub trait SpeechProviderPort: Send + Sync {
    /// 供应商名称（用于日志和失败记录）
    fn name(&self) -> &'static str;

    /// 尝试用本供应商服务一次朗读请求
    ///
    /// Ok 表示请求已被完整服务（Completed 已通过 events 发出）；
    /// Err 表示本梯队失败，编排器将尝试下一个供应商
    async fn attempt(
        &self,
        request: &SpeechRequest,
        events: &EventSink,
    ) -> Result<(), ProviderError>;
}
