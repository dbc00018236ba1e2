//! Synthesis backend seam
//!
//! The pipeline drives an opaque backend one unit at a time. Real engines
//! live behind this trait; the bundled [`SimulatedBackend`] keeps the server
//! runnable end to end without a model.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::error::Result;
use crate::voice::VoiceProfile;

/// An opaque speech synthesis capability.
///
/// Implementations return raw interleaved i16 little-endian PCM frames at
/// `sample_rate()`, so per-unit outputs concatenate in script order without
/// re-muxing. Calls may be slow and may fail; the pipeline treats either as
/// external behavior.
#[async_trait]
pub trait SynthesisBackend: Send + Sync {
    /// Synthesize one unit of text into audio bytes.
    async fn synthesize(&self, text: &str, voice: VoiceProfile, speed: f32) -> Result<Bytes>;

    /// Sample rate of the produced PCM frames.
    fn sample_rate(&self) -> u32;
}

/// Development backend producing a quiet tone sized to the unit's spoken
/// duration, after a configurable artificial latency.
pub struct SimulatedBackend {
    latency: Duration,
    sample_rate: u32,
    base_words_per_minute: u32,
}

impl SimulatedBackend {
    pub fn new(latency: Duration, sample_rate: u32, base_words_per_minute: u32) -> Self {
        Self {
            latency,
            sample_rate,
            base_words_per_minute,
        }
    }

    fn tone_for(&self, words: usize, voice: VoiceProfile, speed: f32) -> Vec<u8> {
        let seconds = words as f64 / (f64::from(self.base_words_per_minute) * f64::from(speed))
            * 60.0;
        let samples = (seconds * f64::from(self.sample_rate)) as usize;

        // Distinct pitch per voice so the demo output is audibly different.
        let frequency = match voice {
            VoiceProfile::UsMale => 110.0,
            VoiceProfile::UsFemale => 220.0,
            VoiceProfile::UkMale => 130.0,
            VoiceProfile::UkFemale => 260.0,
        };

        let mut pcm = Vec::with_capacity(samples * 2);
        for n in 0..samples {
            let t = n as f64 / f64::from(self.sample_rate);
            let amplitude = (t * frequency * std::f64::consts::TAU).sin() * 0.1;
            let sample = (amplitude * f64::from(i16::MAX)) as i16;
            pcm.extend_from_slice(&sample.to_le_bytes());
        }
        pcm
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(200), 24000, 150)
    }
}

#[async_trait]
impl SynthesisBackend for SimulatedBackend {
    async fn synthesize(&self, text: &str, voice: VoiceProfile, speed: f32) -> Result<Bytes> {
        tokio::time::sleep(self.latency).await;

        let words = text.split_whitespace().count();
        let pcm = self.tone_for(words, voice, speed);
        debug!(
            words,
            bytes = pcm.len(),
            %voice,
            "simulated synthesis complete"
        );
        Ok(Bytes::from(pcm))
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}
