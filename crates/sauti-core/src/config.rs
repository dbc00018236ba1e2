//! Configuration types for the Sauti pipeline and server

use serde::{Deserialize, Serialize};

/// Pipeline configuration
///
/// Passed explicitly into jobs rather than held as process-wide state, so
/// concurrent jobs with different budgets can coexist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum characters per synthesis unit
    #[serde(default = "default_max_unit_chars")]
    pub max_unit_chars: usize,

    /// Baseline speaking rate used for duration estimates
    #[serde(default = "default_base_words_per_minute")]
    pub base_words_per_minute: u32,

    /// Highest percent reported while units are still in flight;
    /// 100 is reserved for the terminal completion event
    #[serde(default = "default_progress_ceiling")]
    pub progress_ceiling: u8,

    /// Lowest accepted speed multiplier
    #[serde(default = "default_min_speed")]
    pub min_speed: f32,

    /// Highest accepted speed multiplier
    #[serde(default = "default_max_speed")]
    pub max_speed: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_unit_chars: default_max_unit_chars(),
            base_words_per_minute: default_base_words_per_minute(),
            progress_ceiling: default_progress_ceiling(),
            min_speed: default_min_speed(),
            max_speed: default_max_speed(),
        }
    }
}

fn default_max_unit_chars() -> usize {
    4000
}

fn default_base_words_per_minute() -> u32 {
    150
}

fn default_progress_ceiling() -> u8 {
    90
}

fn default_min_speed() -> f32 {
    0.25
}

fn default_max_speed() -> f32 {
    4.0
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_cors_enabled(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_enabled() -> bool {
    true
}
