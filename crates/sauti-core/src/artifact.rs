//! Final artifact assembly
//!
//! Accumulates per-unit PCM in script order and wraps the result in a WAV
//! container, delivered to the client as a base64 data URL. The reference is
//! opaque to the pipeline; nothing is persisted server-side.

use base64::Engine;
use bytes::Bytes;
use hound::{WavSpec, WavWriter};
use std::io::Cursor;
use tracing::debug;

use crate::error::{Error, Result};

/// Opaque locator for a produced audio artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReference {
    url: String,
}

impl ArtifactReference {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn into_url(self) -> String {
        self.url
    }
}

/// Order-preserving accumulator for per-unit PCM output.
pub struct AudioAssembler {
    sample_rate: u32,
    channels: u16,
    pcm: Vec<u8>,
}

impl AudioAssembler {
    pub fn new(sample_rate: u32, channels: u16) -> Self {
        Self {
            sample_rate,
            channels,
            pcm: Vec::new(),
        }
    }

    /// Append one unit's PCM bytes. Units must arrive in script order.
    pub fn push(&mut self, unit_audio: Bytes) {
        self.pcm.extend_from_slice(&unit_audio);
    }

    pub fn byte_len(&self) -> usize {
        self.pcm.len()
    }

    /// Wrap the accumulated PCM in a WAV container and emit a data URL.
    pub fn into_reference(self) -> Result<ArtifactReference> {
        let spec = WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer =
                WavWriter::new(&mut buffer, spec).map_err(|e| Error::Audio(e.to_string()))?;

            for frame in self.pcm.chunks_exact(2) {
                let sample = i16::from_le_bytes([frame[0], frame[1]]);
                writer
                    .write_sample(sample)
                    .map_err(|e| Error::Audio(e.to_string()))?;
            }

            writer
                .finalize()
                .map_err(|e| Error::Audio(e.to_string()))?;
        }

        let wav = buffer.into_inner();
        debug!(
            pcm_bytes = self.pcm.len(),
            wav_bytes = wav.len(),
            "assembled final artifact"
        );

        let encoded = base64::engine::general_purpose::STANDARD.encode(&wav);
        Ok(ArtifactReference {
            url: format!("data:audio/wav;base64,{}", encoded),
        })
    }
}
