//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层（以及宿主能力）的抽象接口

mod audio_player;
mod preference_store;
mod speech_provider;
mod synthesis_host;

pub use audio_player::{AudioPlayerPort, AudioSource, PlaybackError};
pub use preference_store::{PreferenceStorePort, PREFERRED_VOICE_KEY};
pub use speech_provider::{ProviderError, SpeechProviderPort, SpeechRequest};
pub use synthesis_host::{SynthesisError, SynthesisHostPort, Utterance, UtteranceEvent};
