//! Sauti Core - Long-form speech synthesis pipeline
//!
//! This crate turns an arbitrarily long text script into a sequence of
//! bounded synthesis units, drives them through an opaque backend one at a
//! time, and emits an ordered progress stream that terminates in a single
//! final artifact reference.
//!
//! # Architecture
//!
//! - Pure chunking and duration estimation up front
//! - A per-job state machine advanced by the pipeline task
//! - One event per completed unit, pushed to the transport unbuffered
//! - Explicit terminal events: failure is data, not a dropped connection
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sauti_core::{Job, PipelineConfig, ProgressPipeline, SimulatedBackend, VoiceProfile};
//!
//! let config = PipelineConfig::default();
//! let job = Job::new("Hello, world!", VoiceProfile::UsFemale, 1.0, &config)?;
//! let pipeline = ProgressPipeline::new(Arc::new(SimulatedBackend::default()), config);
//! let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
//! tokio::spawn(async move { pipeline.run(job, tx).await });
//! ```

pub mod artifact;
pub mod backend;
pub mod chunker;
pub mod config;
pub mod duration;
pub mod error;
pub mod event;
pub mod job;
pub mod pipeline;
pub mod sse;
pub mod voice;

pub use artifact::{ArtifactReference, AudioAssembler};
pub use backend::{SimulatedBackend, SynthesisBackend};
pub use config::{PipelineConfig, ServerConfig};
pub use error::{Error, Result};
pub use event::ProgressEvent;
pub use job::{Job, JobStatus};
pub use pipeline::ProgressPipeline;
pub use sse::EventStreamEncoder;
pub use voice::VoiceProfile;
