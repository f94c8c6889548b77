//! Session loop integration tests
//!
//! Exercises transcript handling, exit-phrase detection and the
//! sanitize-then-speak path with mock engines. The completion endpoint
//! is never contacted: the only network path tested here is the exit
//! branch, which returns before any request is made.

mod common;

use common::mock_asr::MockAsr;
use common::mock_tts::MockTts;
use std::sync::Arc;
use voxchat::asr::AsrResult;
use voxchat::completion::CompletionClient;
use voxchat::config::Config;
use voxchat::session::{Session, Turn};
use voxchat::tts::TtsEngine;

fn test_config() -> Config {
    let mut config = Config::default();
    config.api_token = "test-token".to_string();
    config
}

fn session_with(asr: MockAsr) -> (Session, Arc<MockTts>) {
    let config = test_config();
    let client = CompletionClient::new(&config).expect("client should build with a token");
    let mock_tts = Arc::new(MockTts::new());
    let tts: Arc<dyn TtsEngine> = mock_tts.clone();
    (Session::new(config, Box::new(asr), tts, client), mock_tts)
}

#[test]
fn test_transcribe_returns_final_results() {
    let (mut session, _tts) = session_with(MockAsr::with_phrase("hello there", 0.95));

    let first = session.transcribe(&[0i16; 1024]);
    assert_eq!(first.as_deref(), Some("hello there"));

    // Mock queue exhausted: silence
    let second = session.transcribe(&[0i16; 1024]);
    assert!(second.is_none());
}

#[tokio::test]
async fn test_exit_phrase_speaks_farewell() {
    let (mut session, tts) = session_with(MockAsr::new(vec![]));

    let turn = session.handle_transcript("goodbye").await;
    assert_eq!(turn, Turn::Exit);
    assert!(tts.was_spoken("Goodbye!"));
}

#[tokio::test]
async fn test_exit_phrase_is_case_insensitive() {
    let (mut session, tts) = session_with(MockAsr::new(vec![]));

    let turn = session.handle_transcript("  EXIT  ").await;
    assert_eq!(turn, Turn::Exit);
    assert_eq!(tts.get_spoken().len(), 1);
}

#[test]
fn test_reply_is_sanitized_before_speaking() {
    let (session, tts) = session_with(MockAsr::new(vec![]));

    let clean = tokio_test::block_on(
        session.speak_reply("# Answer\n\nHello **world**! Check [docs](http://x.y) 🎉"),
    );

    assert_eq!(clean.as_deref(), Some("Answer Hello world! Check docs"));
    let spoken = tts.get_spoken();
    assert_eq!(spoken, vec!["Answer Hello world! Check docs".to_string()]);
}

#[tokio::test]
async fn test_reply_sanitizing_to_empty_is_not_spoken() {
    let (session, tts) = session_with(MockAsr::new(vec![]));

    let clean = session.speak_reply("```\nonly code here\n```").await;
    assert!(clean.is_none());
    assert!(tts.get_spoken().is_empty());
}

#[tokio::test]
async fn test_tts_failure_does_not_lose_the_reply() {
    let (session, tts) = session_with(MockAsr::new(vec![]));
    *tts.should_fail.lock().unwrap() = true;

    // Speaking fails, but the cleaned text is still returned
    let clean = session.speak_reply("plain reply").await;
    assert_eq!(clean.as_deref(), Some("plain reply"));
}

#[tokio::test]
async fn test_run_loop_greets_and_exits_on_phrase() {
    let asr = MockAsr::new(vec![AsrResult {
        text: "quit".to_string(),
        confidence: 0.9,
    }]);
    let (mut session, tts) = session_with(asr);

    let (audio_tx, audio_rx) = tokio::sync::mpsc::unbounded_channel();
    audio_tx.send(vec![0i16; 1024]).unwrap();

    session.run(audio_rx).await.expect("run should finish");

    let spoken = tts.get_spoken();
    assert_eq!(spoken.len(), 2, "greeting then farewell: {spoken:?}");
    assert!(tts.was_spoken("How can I help"));
    assert!(tts.was_spoken("Goodbye!"));
}

#[tokio::test]
async fn test_run_loop_ends_when_audio_source_closes() {
    let (mut session, tts) = session_with(MockAsr::new(vec![]));

    let (audio_tx, audio_rx) = tokio::sync::mpsc::unbounded_channel::<Vec<i16>>();
    drop(audio_tx);

    session.run(audio_rx).await.expect("run should finish");
    // Only the greeting was spoken
    assert_eq!(tts.get_spoken().len(), 1);
}
