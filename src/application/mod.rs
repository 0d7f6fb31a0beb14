//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechProvider、AudioPlayer、
//!   SynthesisHost、PreferenceStore）
//! - events: 朗读生命周期事件与恰好一次守卫
//! - orchestrator: 供应商责任链编排
//! - error: 对调用方可见的终结失败

pub mod error;
pub mod events;
pub mod orchestrator;
pub mod ports;

pub use error::{ProviderAttempt, SpeechFailure};
pub use events::{EventSink, SpeechCallbacks, SpeechEvent};
pub use orchestrator::SpeechOrchestrator;
pub use ports::{
    AudioPlayerPort, AudioSource, PlaybackError, PreferenceStorePort, ProviderError,
    SpeechProviderPort, SpeechRequest, SynthesisError, SynthesisHostPort, Utterance,
    UtteranceEvent, PREFERRED_VOICE_KEY,
};
