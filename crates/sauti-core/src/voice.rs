//! Voice profile enumeration
//!
//! The accepted voice set is fixed; requests naming anything else are
//! rejected at the boundary rather than passed through to the backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A synthesis voice profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VoiceProfile {
    UsMale,
    #[default]
    UsFemale,
    UkMale,
    UkFemale,
}

impl VoiceProfile {
    /// All selectable profiles, in presentation order.
    pub fn all() -> &'static [VoiceProfile] {
        &[
            VoiceProfile::UsMale,
            VoiceProfile::UsFemale,
            VoiceProfile::UkMale,
            VoiceProfile::UkFemale,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceProfile::UsMale => "us_male",
            VoiceProfile::UsFemale => "us_female",
            VoiceProfile::UkMale => "uk_male",
            VoiceProfile::UkFemale => "uk_female",
        }
    }
}

impl fmt::Display for VoiceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoiceProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "us_male" => Ok(VoiceProfile::UsMale),
            "us_female" => Ok(VoiceProfile::UsFemale),
            "uk_male" => Ok(VoiceProfile::UkMale),
            "uk_female" => Ok(VoiceProfile::UkFemale),
            other => Err(Error::InvalidVoice(other.to_string())),
        }
    }
}
