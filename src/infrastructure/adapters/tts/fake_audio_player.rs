//! Fake Audio Player - 用于测试的音频播放器
//!
//! 不实际出声，按配置成功或失败，并记录播放过的音频来源

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{AudioPlayerPort, AudioSource, PlaybackError};

/// Fake Audio Player 配置
#[derive(Debug, Clone)]
pub struct FakeAudioPlayerConfig {
    /// 是否模拟播放失败
    pub fail: bool,
    /// 模拟的播放时长（毫秒）
    pub delay_ms: u64,
}

impl Default for FakeAudioPlayerConfig {
    fn default() -> Self {
        Self {
            fail: false,
            delay_ms: 0,
        }
    }
}

/// Fake Audio Player
pub struct FakeAudioPlayer {
    config: FakeAudioPlayerConfig,
    /// 记录播放过的来源
    played: Mutex<Vec<AudioSource>>,
}

impl FakeAudioPlayer {
    pub fn new(config: FakeAudioPlayerConfig) -> Self {
        Self {
            config,
            played: Mutex::new(Vec::new()),
        }
    }

    /// 使用默认配置创建（总是播放成功）
    pub fn with_defaults() -> Self {
        Self::new(FakeAudioPlayerConfig::default())
    }

    /// 已播放来源的快照
    pub async fn played(&self) -> Vec<AudioSource> {
        self.played.lock().await.clone()
    }
}

#[async_trait]
impl AudioPlayerPort for FakeAudioPlayer {
    async fn play(&self, source: AudioSource) -> Result<(), PlaybackError> {
        tracing::debug!(source = %source.describe(), "FakeAudioPlayer: play");

        self.played.lock().await.push(source);

        if self.config.delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.delay_ms)).await;
        }

        if self.config.fail {
            Err(PlaybackError::Failed(
                "simulated playback failure".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
