//! Core types for the Somnus scoring engine
//!
//! This module defines the structures that flow through a scoring pass: the
//! input sleep record, the per-component score breakdown, and the final
//! result object.

use serde::{Deserialize, Serialize};

/// A single night's sleep measurements, as validated by the transport
/// adapter before scoring.
///
/// `bedtime` and `wake_time` are 24-hour wall-clock values ("HH:MM"); a wake
/// time numerically earlier than bedtime is interpreted as the following
/// calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepRecord {
    /// Time the user went to bed ("HH:MM", 24h)
    pub bedtime: String,
    /// Time the user woke up ("HH:MM", 24h)
    pub wake_time: String,
    /// Total sleep time (minutes actually asleep)
    pub tst_min: u32,
    /// Wake after sleep onset (minutes awake after first falling asleep)
    pub waso_min: u32,
    /// Number of awakenings during the night
    pub awakenings: u32,
    /// Deep sleep minutes, if the device reports them
    #[serde(default)]
    pub deep_min: StageMinutes,
    /// REM sleep minutes, if the device reports them
    #[serde(default)]
    pub rem_min: StageMinutes,
    /// Whether caffeine was consumed after 14:00
    #[serde(default)]
    pub caffeine_after_14: bool,
}

/// Stage minutes reported by a device: absent, reported as zero, or a
/// positive count.
///
/// The distinction matters because the stage sub-scorer treats a reported
/// zero the same as an absent value, while percentage derivation (used for
/// recommendations and the explanation string) treats zero as a real
/// measurement. Both rules are intentional; see [`StageMinutes::nonzero`]
/// and [`StageMinutes::provided`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum StageMinutes {
    /// The device did not report this stage
    #[default]
    Absent,
    /// The device reported zero minutes in this stage
    Zero,
    /// The device reported a positive minute count
    Minutes(u32),
}

impl StageMinutes {
    /// Minutes if the device reported anything at all, including zero.
    pub fn provided(self) -> Option<u32> {
        match self {
            StageMinutes::Absent => None,
            StageMinutes::Zero => Some(0),
            StageMinutes::Minutes(m) => Some(m),
        }
    }

    /// Minutes only when a positive count was reported. A reported zero is
    /// treated as absent for stage scoring.
    pub fn nonzero(self) -> Option<u32> {
        match self {
            StageMinutes::Minutes(m) if m > 0 => Some(m),
            _ => None,
        }
    }
}

impl From<Option<u32>> for StageMinutes {
    fn from(value: Option<u32>) -> Self {
        match value {
            None => StageMinutes::Absent,
            Some(0) => StageMinutes::Zero,
            Some(m) => StageMinutes::Minutes(m),
        }
    }
}

impl From<StageMinutes> for Option<u32> {
    fn from(value: StageMinutes) -> Self {
        value.provided()
    }
}

/// The four independent sub-scores, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Total sleep time vs the 7-9 hour optimal band
    pub duration: f64,
    /// Sleep efficiency (TST / time in bed)
    pub efficiency: f64,
    /// Continuity (WASO and awakening count)
    pub continuity: f64,
    /// Deep/REM stage distribution
    pub stages: f64,
}

/// Qualitative sleep quality label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLabel::Excellent => "excellent",
            QualityLabel::Good => "good",
            QualityLabel::Fair => "fair",
            QualityLabel::Poor => "poor",
        }
    }

    /// Fixed one-line description shown alongside the label.
    pub fn description(&self) -> &'static str {
        match self {
            QualityLabel::Excellent => {
                "You had an excellent night's sleep - restorative and efficient."
            }
            QualityLabel::Good => {
                "Your sleep quality is good, though there's room for optimization."
            }
            QualityLabel::Fair => "Your sleep was somewhat disturbed or insufficient.",
            QualityLabel::Poor => "Your sleep quality was low - likely fragmented or too short.",
        }
    }

    /// Map a final 0-100 score to its label by descending threshold.
    pub fn from_score(score: u8) -> Self {
        if score >= 85 {
            QualityLabel::Excellent
        } else if score >= 70 {
            QualityLabel::Good
        } else if score >= 50 {
            QualityLabel::Fair
        } else {
            QualityLabel::Poor
        }
    }
}

/// Complete scoring result for one night.
///
/// Field names match the transport schema consumers already depend on, so
/// an adapter can serialize this struct directly. The recommendations list
/// is duplicated under two keys for interface compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepQualityResult {
    pub sleep_quality: QualityLabel,
    pub sleep_quality_score: u8,
    pub sleep_quality_description: String,
    pub sleep_quality_recommendations: Vec<String>,
    pub sleep_quality_score_explanation: String,
    pub sleep_quality_score_recommendations: Vec<String>,
}
