pub mod mock_asr;
pub mod mock_tts;
