//! TTS Adapters - 回退链三个梯队的供应商实现

mod elevenlabs_client;
mod fake_audio_player;
mod fake_synthesis_host;
mod local_synthesis;
mod translate_tts_client;

pub use elevenlabs_client::{ElevenLabsClient, ElevenLabsClientConfig};
pub use fake_audio_player::{FakeAudioPlayer, FakeAudioPlayerConfig};
pub use fake_synthesis_host::{FakeSynthesisHost, FakeSynthesisHostConfig};
pub use local_synthesis::LocalSynthesisProvider;
pub use translate_tts_client::{TranslateTtsClient, TranslateTtsClientConfig};
