//! Audio capture module using cpal

use anyhow::{Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tracing::{info, warn};

const SAMPLE_RATE: u32 = 16000;
const CHUNK_SIZE: usize = 1024;

/// Handle owning the live input stream. The microphone is released when
/// this is dropped, so the session keeps it in scope for its lifetime.
pub struct AudioCapture {
    _stream: cpal::Stream,
}

/// Open the input device and start capturing 16 kHz mono chunks
pub fn start_capture(
    device_index: Option<usize>,
) -> Result<(AudioCapture, UnboundedReceiver<Vec<i16>>)> {
    let host = cpal::default_host();

    // List available devices
    info!("Available audio input devices:");
    for (i, device) in host.input_devices()?.enumerate() {
        let name = device.name().unwrap_or_else(|_| "Unknown".to_string());
        let marker = if device_index == Some(i) { "*" } else { " " };
        info!("  {} [{}] {}", marker, i, name);
    }

    // Select device
    let device = if let Some(idx) = device_index {
        host.input_devices()?
            .nth(idx)
            .context("Device index out of range")?
    } else {
        host.default_input_device()
            .context("No default input device")?
    };

    let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());
    info!("Using audio device: {}", device_name);

    // Configure stream
    let config = cpal::StreamConfig {
        channels: 1,
        sample_rate: cpal::SampleRate(SAMPLE_RATE),
        buffer_size: cpal::BufferSize::Fixed(CHUNK_SIZE as u32),
    };

    let (tx, rx) = unbounded_channel::<Vec<i16>>();

    // Build input stream
    let stream = device.build_input_stream(
        &config,
        move |data: &[i16], _: &cpal::InputCallbackInfo| {
            // Forward audio chunk to the session loop
            if tx.send(data.to_vec()).is_err() {
                warn!("Audio receiver dropped");
            }
        },
        |err| {
            warn!("Audio stream error: {}", err);
        },
        None,
    )?;

    stream.play()?;

    Ok((AudioCapture { _stream: stream }, rx))
}

/// Calculate audio energy (RMS) for simple level checks
pub fn calculate_energy(samples: &[i16]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum: i64 = samples.iter().map(|&s| (s as i64).pow(2)).sum();
    (sum as f32 / samples.len() as f32).sqrt()
}
