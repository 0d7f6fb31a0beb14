//! Vocablo - 西班牙语词汇测验核心
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Vocabulary Context: 词汇条目与验证边界
//! - Quiz Context: 题目生成与成绩统计
//! - Voice Context: 西语语音过滤、打分与挑选
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SpeechProvider, AudioPlayer, SynthesisHost,
//!   PreferenceStore）
//! - Events: 朗读生命周期事件与恰好一次守卫
//! - Orchestrator: 三梯队回退链编排
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: ElevenLabs / Translate TTS / 本地合成、测试 Fake
//! - Memory: 内存偏好存储
//!
//! 界面、词表加载与持久化都是库外协作者，通过
//! application/ports 的契约接入；语音失败从不影响测验可玩性。

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use application::{SpeechCallbacks, SpeechFailure, SpeechOrchestrator, SpeechRequest};
pub use config::{load_config, AppConfig};
pub use domain::quiz::{accuracy, format_elapsed, generate_questions, QuizQuestion};
pub use domain::vocabulary::{validate_vocabulary, VocabularyWord};
pub use domain::voice::{SpeechParams, VoiceDescriptor};
pub use infrastructure::build_orchestrator;
