//! Audio Player Port - 音频播放抽象
//!
//! 网络梯队拿到的音频（字节或 URL）交给宿主的播放能力。
//! 字节缓冲的所有权移交给播放器，成功或失败路径上都会随
//! drop 释放。

use async_trait::async_trait;
use thiserror::Error;

/// 待播放的音频来源
#[derive(Debug, Clone)]
pub enum AudioSource {
    /// 网络合成返回的音频字节
    Bytes { data: Vec<u8>, mime: String },
    /// 可直接播放的音频 URL
    Url(String),
}

impl AudioSource {
    /// 日志用摘要，避免把整段字节或带文本的 URL 打进日志
    pub fn describe(&self) -> String {
        match self {
            Self::Bytes { data, mime } => format!("{} ({} bytes)", mime, data.len()),
            Self::Url(url) => {
                let end = url.find('?').unwrap_or(url.len());
                format!("url {}", &url[..end])
            }
        }
    }
}

/// 播放错误
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("Playback rejected: {0}")]
    Rejected(String),

    #[error("Playback failed: {0}")]
    Failed(String),
}

/// Audio Player Port
#[async_trait]
pub trait AudioPlayerPort: Send + Sync {
    /// 播放一段音频，播放自然结束后返回
    async fn play(&self, source: AudioSource) -> Result<(), PlaybackError>;
}
