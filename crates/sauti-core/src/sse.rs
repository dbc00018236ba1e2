//! Server-sent event frame encoding
//!
//! Each progress event becomes exactly one `data: <json>\n\n` frame. The
//! trailing blank line makes frames self-delimiting, so a client can recover
//! individual events from the continuous byte stream.

use serde::Serialize;

use crate::error::Result;
use crate::event::ProgressEvent;

/// Wire shape of one frame; absent fields are omitted from the JSON.
#[derive(Debug, Serialize)]
struct StreamFrame {
    #[serde(skip_serializing_if = "Option::is_none")]
    progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<u64>,
    #[serde(rename = "audioUrl", skip_serializing_if = "Option::is_none")]
    audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Serializes pipeline events into SSE wire frames.
pub struct EventStreamEncoder;

impl EventStreamEncoder {
    /// Encode one event as one flushed-ready SSE frame.
    pub fn encode(event: &ProgressEvent) -> Result<String> {
        let frame = match event {
            ProgressEvent::Started { duration_secs } => StreamFrame {
                progress: Some(0),
                duration: Some(*duration_secs),
                audio_url: None,
                error: None,
            },
            ProgressEvent::Progress { percent } => StreamFrame {
                progress: Some(*percent),
                duration: None,
                audio_url: None,
                error: None,
            },
            ProgressEvent::Completed {
                artifact,
                duration_secs,
            } => StreamFrame {
                progress: Some(100),
                duration: Some(*duration_secs),
                audio_url: Some(artifact.url().to_string()),
                error: None,
            },
            ProgressEvent::Failed { reason } => StreamFrame {
                progress: None,
                duration: None,
                audio_url: None,
                error: Some(reason.clone()),
            },
        };

        Ok(format!("data: {}\n\n", serde_json::to_string(&frame)?))
    }
}
