//! Playback duration estimation
//!
//! Word-count based estimate against a baseline speaking rate, scaled by the
//! requested speed multiplier. Used for the initial progress event so the
//! client can size its progress UI before any audio exists.

use crate::error::{Error, Result};

/// Estimate playback duration in whole seconds.
///
/// `words / (base_wpm * speed) * 60`, rounded. An empty script has zero
/// words and estimates to zero seconds. Fails with `InvalidSpeed` for a
/// non-positive multiplier.
pub fn estimate(script: &str, speed: f32, base_words_per_minute: u32) -> Result<u64> {
    if speed <= 0.0 || !speed.is_finite() {
        return Err(Error::InvalidSpeed(speed));
    }

    let words = script.split_whitespace().count();
    if words == 0 {
        return Ok(0);
    }

    let adjusted_wpm = f64::from(base_words_per_minute) * f64::from(speed);
    let seconds = (words as f64 / adjusted_wpm * 60.0).round();
    Ok(seconds as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_WPM: u32 = 150;

    #[test]
    fn empty_script_is_zero_seconds() {
        assert_eq!(estimate("", 1.0, BASE_WPM).unwrap(), 0);
    }

    #[test]
    fn single_word_rounds_to_zero() {
        // 1 word / 150 wpm * 60 = 0.4s, rounds to 0
        assert_eq!(estimate("hello", 1.0, BASE_WPM).unwrap(), 0);
    }

    #[test]
    fn known_word_count() {
        // 300 words at 150 wpm = 2 minutes
        let script = vec!["word"; 300].join(" ");
        assert_eq!(estimate(&script, 1.0, BASE_WPM).unwrap(), 120);
    }

    #[test]
    fn monotonically_decreasing_in_speed() {
        let script = vec!["word"; 600].join(" ");
        let mut previous = u64::MAX;
        for speed in [0.25, 0.5, 1.0, 2.0, 4.0] {
            let seconds = estimate(&script, speed, BASE_WPM).unwrap();
            assert!(seconds <= previous, "estimate rose at speed {}", speed);
            previous = seconds;
        }
    }

    #[test]
    fn doubling_words_roughly_doubles_estimate() {
        let script = vec!["word"; 450].join(" ");
        let doubled = format!("{} {}", script, script);
        let one = estimate(&script, 1.0, BASE_WPM).unwrap();
        let two = estimate(&doubled, 1.0, BASE_WPM).unwrap();
        assert!((two as i64 - 2 * one as i64).abs() <= 1);
    }

    #[test]
    fn rejects_non_positive_speed() {
        assert!(matches!(
            estimate("hello", 0.0, BASE_WPM),
            Err(Error::InvalidSpeed(_))
        ));
        assert!(matches!(
            estimate("hello", -1.5, BASE_WPM),
            Err(Error::InvalidSpeed(_))
        ));
    }
}
