//! Script generation endpoint
//!
//! Validates the request up front, then hands the job to a spawned pipeline
//! task and streams its events back as server-sent events. Each event
//! becomes one flushed frame; the client sees progress as it happens.

use std::convert::Infallible;

use axum::{
    body::Body,
    extract::{Json, State},
    http::{header, StatusCode},
    response::Response,
};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;
use sauti_core::{EventStreamEncoder, Job, ProgressPipeline, VoiceProfile};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default)]
    pub speed: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<&'static str>,
}

/// List the fixed set of selectable voice profiles.
pub async fn voices() -> Json<VoicesResponse> {
    Json(VoicesResponse {
        voices: VoiceProfile::all().iter().map(|v| v.as_str()).collect(),
    })
}

/// Synthesize a script, streaming progress as `text/event-stream`.
///
/// All validation happens before the stream is opened; a rejected request
/// gets a plain 400 and no events.
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Response, ApiError> {
    let script = req
        .script
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Missing script"))?;

    let voice = match req.voice.as_deref() {
        Some(name) => name.parse::<VoiceProfile>()?,
        None => VoiceProfile::default(),
    };
    let speed = req.speed.unwrap_or(1.0);

    let job = Job::new(script, voice, speed, &state.pipeline_config)?;
    debug!(job_id = %job.id, units = job.units.len(), "accepted generation request");

    let pipeline = ProgressPipeline::new(state.backend.clone(), state.pipeline_config.clone());
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let job_id = job.id;
    tokio::spawn(async move {
        // A closed transport surfaces here; there is nobody left to tell.
        if let Err(err) = pipeline.run(job, event_tx).await {
            debug!(job_id = %job_id, error = %err, "pipeline aborted");
        }
    });

    let stream = async_stream::stream! {
        while let Some(event) = event_rx.recv().await {
            match EventStreamEncoder::encode(&event) {
                Ok(frame) => yield Ok::<_, Infallible>(frame),
                Err(err) => {
                    debug!(error = %err, "dropping unencodable event");
                    break;
                }
            }
        }
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(stream))
        .map_err(|e| ApiError::internal(e.to_string()))
}
