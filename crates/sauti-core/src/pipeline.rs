//! Progress pipeline
//!
//! Drives a job's units sequentially through the synthesis backend, pushing
//! ordered progress events into an unbounded channel. The transport end of
//! that channel turns each event into one flushed wire frame, so the
//! pipeline never buffers events and never blocks on a slow client.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use crate::artifact::AudioAssembler;
use crate::backend::SynthesisBackend;
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::event::ProgressEvent;
use crate::job::Job;

pub struct ProgressPipeline {
    backend: Arc<dyn SynthesisBackend>,
    config: PipelineConfig,
}

impl ProgressPipeline {
    pub fn new(backend: Arc<dyn SynthesisBackend>, config: PipelineConfig) -> Self {
        Self { backend, config }
    }

    /// Run `job` to a terminal state, emitting events on `tx`.
    ///
    /// Units are processed strictly in script order; the accumulated audio
    /// buffer depends on it. A backend failure is reported in-band as a
    /// terminal `Failed` event and returns `Ok`. A closed transport aborts
    /// the in-flight unit, emits nothing further, and returns
    /// `TransportClosed` so the caller can log the abort.
    pub async fn run(&self, mut job: Job, tx: UnboundedSender<ProgressEvent>) -> Result<()> {
        let total_units = job.units.len();
        info!(
            job_id = %job.id,
            units = total_units,
            duration_secs = job.duration_secs,
            voice = %job.voice,
            "starting synthesis job"
        );

        job.start();
        Self::emit(
            &tx,
            ProgressEvent::Started {
                duration_secs: job.duration_secs,
            },
        )?;

        let mut assembler = AudioAssembler::new(self.backend.sample_rate(), 1);

        for index in 0..total_units {
            job.processing(index);

            let synthesized = tokio::select! {
                // Client went away: stop promptly instead of synthesizing
                // the rest of the script into a void.
                _ = tx.closed() => {
                    warn!(job_id = %job.id, unit = index, "transport closed, aborting job");
                    return Err(Error::TransportClosed);
                }
                result = self.backend.synthesize(&job.units[index], job.voice, job.speed) => result,
            };

            match synthesized {
                Ok(audio) => {
                    assembler.push(audio);
                    let percent = Self::unit_percent(index, total_units, self.config.progress_ceiling);
                    let percent = job.advance(percent);
                    debug!(
                        job_id = %job.id,
                        unit = index,
                        percent,
                        buffered_bytes = assembler.byte_len(),
                        "unit synthesized"
                    );
                    Self::emit(&tx, ProgressEvent::Progress { percent })?;
                }
                Err(err) => {
                    warn!(job_id = %job.id, unit = index, error = %err, "unit failed, aborting job");
                    job.fail();
                    Self::emit(
                        &tx,
                        ProgressEvent::Failed {
                            reason: format!("unit {} of {}: {}", index + 1, total_units, err),
                        },
                    )?;
                    return Ok(());
                }
            }
        }

        let artifact = assembler.into_reference()?;
        job.complete();
        info!(job_id = %job.id, "synthesis job completed");
        Self::emit(
            &tx,
            ProgressEvent::Completed {
                artifact,
                duration_secs: job.duration_secs,
            },
        )?;
        Ok(())
    }

    /// Percent after finishing unit `index` of `total`, capped at the
    /// configured ceiling so 100 stays reserved for the terminal event.
    fn unit_percent(index: usize, total: usize, ceiling: u8) -> u8 {
        if total == 0 {
            return 0;
        }
        (((index + 1) as f64 / total as f64) * f64::from(ceiling)).round() as u8
    }

    fn emit(tx: &UnboundedSender<ProgressEvent>, event: ProgressEvent) -> Result<()> {
        tx.send(event).map_err(|_| Error::TransportClosed)
    }
}
