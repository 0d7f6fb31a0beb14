//! Voice Context - 语音限界上下文
//!
//! 职责:
//! - 语音描述与朗读参数
//! - 西班牙语语音的过滤、打分与挑选

mod selection;
mod value_objects;

pub use selection::{best_spanish_voice, score_voice, spanish_candidates};
pub use value_objects::{SpeechParams, VoiceDescriptor};
