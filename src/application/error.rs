//! 应用层错误定义
//!
//! 供应商级错误（ProviderError）被编排器吞掉并触发回退，
//! 这里只定义对调用方可见的终结失败。

use thiserror::Error;

/// 链上一次失败的供应商尝试记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderAttempt {
    pub provider: &'static str,
    pub error: String,
}

/// 朗读请求的终结失败
///
/// 只通过 onError 事件对外暴露，从不作为返回值抛出：
/// 语音失败不允许影响测验本身的可玩性
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechFailure {
    /// 所有梯队都失败（含宿主完全没有语音能力的情况）
    #[error("all speech providers failed ({} attempts)", .attempts.len())]
    Exhausted { attempts: Vec<ProviderAttempt> },
}
