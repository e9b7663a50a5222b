//! Decoding of synthesized speech into playable samples.
//!
//! Playback itself belongs to the embedding application; this module
//! only turns the base64 payload into PCM.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::gateway::SPEECH_SAMPLE_RATE;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Audio payload is empty")]
    Empty,

    #[error("Invalid base64 audio payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("PCM payload has odd length {0}; expected 16-bit samples")]
    OddLength(usize),
}

/// Mono signed 16-bit PCM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmClip {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

impl PcmClip {
    /// Decode a base64 little-endian PCM payload at the speech sample rate.
    pub fn from_base64(payload: &str) -> Result<Self, AudioError> {
        if payload.is_empty() {
            return Err(AudioError::Empty);
        }
        let bytes = STANDARD.decode(payload.trim())?;
        Self::from_le_bytes(&bytes)
    }

    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, AudioError> {
        if bytes.is_empty() {
            return Err(AudioError::Empty);
        }
        if bytes.len() % 2 != 0 {
            return Err(AudioError::OddLength(bytes.len()));
        }
        let samples = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(Self {
            samples,
            sample_rate: SPEECH_SAMPLE_RATE,
        })
    }

    /// Samples scaled into `[-1.0, 1.0)`.
    pub fn to_f32(&self) -> Vec<f32> {
        self.samples
            .iter()
            .map(|&s| f32::from(s) / 32768.0)
            .collect()
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.samples.len() as f64 / f64::from(self.sample_rate))
    }
}
