//! Job construction and progress state
//!
//! One `Job` is one end-to-end synthesis request. All request validation
//! happens here, before any stream is opened, so the HTTP layer can reject
//! bad input with a plain error response.

use serde::Serialize;
use uuid::Uuid;

use crate::chunker;
use crate::config::PipelineConfig;
use crate::duration;
use crate::error::{Error, Result};
use crate::voice::VoiceProfile;

/// Job lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JobStatus {
    Idle,
    Started,
    /// Index of the unit currently in flight.
    Processing(usize),
    Completed,
    Failed,
}

/// One synthesis request and its mutable progress state.
///
/// Script and units are fixed at construction; only `status` and `progress`
/// move, driven exclusively by the pipeline. Progress is monotone by
/// construction of [`Job::advance`].
#[derive(Debug)]
pub struct Job {
    pub id: Uuid,
    pub script: String,
    pub voice: VoiceProfile,
    pub speed: f32,
    pub units: Vec<String>,
    pub duration_secs: u64,
    status: JobStatus,
    progress: u8,
}

impl Job {
    /// Validate a request and derive its units and duration estimate.
    ///
    /// Fails with `InvalidScript` for an empty (post-trim) script and
    /// `InvalidSpeed` for a multiplier outside the configured bounds. No
    /// unit is synthesized and no event is emitted for a rejected request.
    pub fn new(script: &str, voice: VoiceProfile, speed: f32, config: &PipelineConfig) -> Result<Self> {
        let script = script.trim();
        if script.is_empty() {
            return Err(Error::InvalidScript(
                "script must contain at least one word".to_string(),
            ));
        }
        if !speed.is_finite() || speed < config.min_speed || speed > config.max_speed {
            return Err(Error::InvalidSpeed(speed));
        }

        let units = chunker::chunk(script, config.max_unit_chars);
        let duration_secs = duration::estimate(script, speed, config.base_words_per_minute)?;

        Ok(Self {
            id: Uuid::new_v4(),
            script: script.to_string(),
            voice,
            speed,
            units,
            duration_secs,
            status: JobStatus::Idle,
            progress: 0,
        })
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub(crate) fn start(&mut self) {
        self.status = JobStatus::Started;
    }

    pub(crate) fn processing(&mut self, index: usize) {
        self.status = JobStatus::Processing(index);
    }

    /// Raise progress to `percent`, never lowering it.
    pub(crate) fn advance(&mut self, percent: u8) -> u8 {
        self.progress = self.progress.max(percent.min(100));
        self.progress
    }

    pub(crate) fn complete(&mut self) {
        self.status = JobStatus::Completed;
        self.progress = 100;
    }

    pub(crate) fn fail(&mut self) {
        self.status = JobStatus::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_script() {
        let config = PipelineConfig::default();
        for script in ["", "   ", "\n\t"] {
            assert!(matches!(
                Job::new(script, VoiceProfile::default(), 1.0, &config),
                Err(Error::InvalidScript(_))
            ));
        }
    }

    #[test]
    fn rejects_out_of_range_speed() {
        let config = PipelineConfig::default();
        for speed in [0.0, 0.1, 4.5, -1.0, f32::NAN] {
            assert!(matches!(
                Job::new("hello world", VoiceProfile::default(), speed, &config),
                Err(Error::InvalidSpeed(_))
            ));
        }
    }

    #[test]
    fn derives_units_and_duration() {
        let config = PipelineConfig {
            max_unit_chars: 10,
            ..PipelineConfig::default()
        };
        let script = vec!["word"; 300].join(" ");
        let job = Job::new(&script, VoiceProfile::UsMale, 1.0, &config).unwrap();
        assert!(job.units.len() > 1);
        assert_eq!(job.duration_secs, 120);
        assert_eq!(job.status(), JobStatus::Idle);
        assert_eq!(job.progress(), 0);
    }

    #[test]
    fn advance_is_monotone() {
        let config = PipelineConfig::default();
        let mut job = Job::new("hello", VoiceProfile::default(), 1.0, &config).unwrap();
        assert_eq!(job.advance(40), 40);
        assert_eq!(job.advance(30), 40);
        assert_eq!(job.advance(90), 90);
    }
}
