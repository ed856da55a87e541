//! Scoring orchestration
//!
//! This module provides the public API for Somnus. One call scores one
//! night: derive time in bed, compute the four sub-scores, combine them,
//! and attach the label, recommendations, and explanation string. The whole
//! pass is pure; identical input always yields identical output.

use crate::error::ScoreError;
use crate::interval;
use crate::recommend::{self, RecommendationInputs};
use crate::scoring;
use crate::types::{QualityLabel, ScoreBreakdown, SleepQualityResult, SleepRecord};

/// Score one night's sleep record.
///
/// Fails with [`ScoreError::InvalidInterval`] when bedtime and wake time
/// yield a non-positive time in bed, and with [`ScoreError::TimeParse`] when
/// either clock string is malformed (the transport adapter is expected to
/// catch the latter first).
///
/// # Example
/// ```
/// use somnus::{compute_quality, SleepRecord, StageMinutes};
///
/// let record = SleepRecord {
///     bedtime: "23:00".to_string(),
///     wake_time: "07:00".to_string(),
///     tst_min: 456,
///     waso_min: 5,
///     awakenings: 1,
///     deep_min: StageMinutes::Absent,
///     rem_min: StageMinutes::Absent,
///     caffeine_after_14: false,
/// };
/// let result = compute_quality(&record)?;
/// assert!(result.sleep_quality_score <= 100);
/// # Ok::<(), somnus::ScoreError>(())
/// ```
pub fn compute_quality(record: &SleepRecord) -> Result<SleepQualityResult, ScoreError> {
    let time_in_bed = interval::time_in_bed_min(&record.bedtime, &record.wake_time)?;

    // time_in_bed is strictly positive past the interval guard
    let efficiency = f64::from(record.tst_min) / time_in_bed as f64;

    // Stage percentages for recommendations and the explanation. Unlike the
    // stage sub-score, a reported zero counts as a measurement here.
    let (deep_pct, rem_pct) = if record.tst_min > 0 {
        let tst = f64::from(record.tst_min);
        (
            record.deep_min.provided().map(|m| f64::from(m) / tst),
            record.rem_min.provided().map(|m| f64::from(m) / tst),
        )
    } else {
        (None, None)
    };

    let breakdown = ScoreBreakdown {
        duration: scoring::score_duration(record.tst_min),
        efficiency: scoring::score_efficiency(record.tst_min, time_in_bed),
        continuity: scoring::score_continuity(record.waso_min, record.awakenings),
        stages: scoring::score_stages(record.deep_min, record.rem_min, record.tst_min),
    };

    let weighted = breakdown.weighted() - scoring::lifestyle_penalty(record.caffeine_after_14);
    let score = weighted.round().clamp(0.0, 100.0) as u8;
    let label = QualityLabel::from_score(score);

    let recommendations = recommend::recommendations(&RecommendationInputs {
        efficiency,
        waso_min: record.waso_min,
        awakenings: record.awakenings,
        deep_pct,
        rem_pct,
        caffeine_after_14: record.caffeine_after_14,
        tst_min: record.tst_min,
    });

    let explanation = build_explanation(record, efficiency, deep_pct, rem_pct);

    Ok(SleepQualityResult {
        sleep_quality: label,
        sleep_quality_score: score,
        sleep_quality_description: label.description().to_string(),
        sleep_quality_recommendations: recommendations.clone(),
        sleep_quality_score_explanation: explanation,
        sleep_quality_score_recommendations: recommendations,
    })
}

/// Score a JSON-encoded sleep record and return the result as JSON.
///
/// Convenience wrapper for transport adapters and the CLI batch path; each
/// call is independent.
pub fn score_json(record_json: &str) -> Result<String, ScoreError> {
    let record: SleepRecord = serde_json::from_str(record_json)?;
    let result = compute_quality(&record)?;
    Ok(serde_json::to_string(&result)?)
}

/// Pipe-delimited summary of the metrics behind the score.
fn build_explanation(
    record: &SleepRecord,
    efficiency: f64,
    deep_pct: Option<f64>,
    rem_pct: Option<f64>,
) -> String {
    let mut parts = vec![
        format!("Duration: {}", recommend::format_duration(record.tst_min)),
        format!("Efficiency: {:.1}%", efficiency * 100.0),
        format!("WASO: {}min", record.waso_min),
        format!("Awakenings: {}", record.awakenings),
    ];

    if let Some(deep) = deep_pct {
        parts.push(format!("Deep sleep: {:.1}%", deep * 100.0));
    }
    if let Some(rem) = rem_pct {
        parts.push(format!("REM: {:.1}%", rem * 100.0));
    }
    if record.caffeine_after_14 {
        parts.push("Caffeine after 14:00".to_string());
    }

    parts.join(" | ")
}
