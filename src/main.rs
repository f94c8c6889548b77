//! VoxChat - Voice-Driven Chat Client
//!
//! Listens on the microphone, sends transcripts to a remote completion
//! endpoint and speaks the sanitized replies.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use voxchat::audio;
use voxchat::config::Config;
use voxchat::session::Session;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Audio input device index
    #[arg(short, long)]
    device: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🎧 VoxChat v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config and build the session (fails fast on a missing token)
    let config = Config::load()?;
    let mut session = Session::from_config(config)?;

    // Initialize audio capture; the handle keeps the device open
    let (_capture, audio_rx) = audio::start_capture(args.device)?;
    info!("🎙️ Audio capture started");

    session.run(audio_rx).await
}
