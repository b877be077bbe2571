//! Fatigue estimation from last night's sleep and the current mood.
//!
//! The estimate is a deliberately simple heuristic: fewer hours of sleep mean
//! more fatigue, and mood nudges the result by one point either way.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Maximum sleep hours accepted by the estimator.
pub const MAX_SLEEP_HOURS: u8 = 12;

/// Self-reported mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Good,
    Neutral,
    Bad,
}

impl Mood {
    fn adjustment(self) -> i32 {
        match self {
            Mood::Good => -1,
            Mood::Neutral => 0,
            Mood::Bad => 1,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mood::Good => "good",
            Mood::Neutral => "neutral",
            Mood::Bad => "bad",
        };
        f.write_str(name)
    }
}

impl FromStr for Mood {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" | "좋음" => Ok(Mood::Good),
            "neutral" | "ok" | "보통" => Ok(Mood::Neutral),
            "bad" | "나쁨" => Ok(Mood::Bad),
            other => Err(CoreError::invalid(
                "mood",
                format!("unknown mood '{other}', expected good, neutral or bad"),
            )),
        }
    }
}

/// Fatigue on a 1..=10 scale. Construction always clamps into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FatigueScore(u8);

impl FatigueScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Saturating constructor.
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(Self::MIN as i32, Self::MAX as i32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn level(self) -> FatigueLevel {
        FatigueLevel::from_score(self)
    }
}

impl TryFrom<u8> for FatigueScore {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::invalid(
                "fatigue_score",
                format!("{value} is outside {}..={}", Self::MIN, Self::MAX),
            ))
        }
    }
}

impl From<FatigueScore> for u8 {
    fn from(score: FatigueScore) -> Self {
        score.0
    }
}

impl fmt::Display for FatigueScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Coarse banding of a fatigue score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FatigueLevel {
    /// Score 1..=3
    Low,
    /// Score 4..=6
    Medium,
    /// Score 7..=10
    High,
}

impl FatigueLevel {
    pub fn from_score(score: FatigueScore) -> Self {
        match score.value() {
            0..=3 => FatigueLevel::Low,
            4..=6 => FatigueLevel::Medium,
            _ => FatigueLevel::High,
        }
    }
}

impl fmt::Display for FatigueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FatigueLevel::Low => "low",
            FatigueLevel::Medium => "medium",
            FatigueLevel::High => "high",
        };
        f.write_str(name)
    }
}

/// Estimate fatigue from hours slept and mood.
///
/// `10 - sleep_hours`, one point less for a good mood and one more for a bad
/// one, saturated into 1..=10. Sleep above [`MAX_SLEEP_HOURS`] counts as
/// [`MAX_SLEEP_HOURS`].
pub fn estimate_fatigue(sleep_hours: u8, mood: Mood) -> FatigueScore {
    let sleep = sleep_hours.min(MAX_SLEEP_HOURS) as i32;
    let score = FatigueScore::clamped(10 - sleep + mood.adjustment());
    tracing::debug!(sleep_hours, %mood, score = score.value(), "estimated fatigue");
    score
}
