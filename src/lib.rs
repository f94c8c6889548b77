//! VoxChat Library
//!
//! Core modules for the VoxChat voice-driven chat client.

pub mod asr;
pub mod audio;
pub mod completion;
pub mod config;
pub mod error;
pub mod sanitize;
pub mod session;
pub mod tts;
