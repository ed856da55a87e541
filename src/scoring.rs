//! Sub-score computation
//!
//! Four independent components, each on a 0-100 scale:
//! - Duration vs the 7-9 hour optimal band
//! - Sleep efficiency (TST / time in bed)
//! - Continuity (WASO and awakening count)
//! - Deep/REM stage distribution
//!
//! Breakpoints and weights are product-owned constants; do not reshape the
//! piecewise curves without sign-off.

use crate::types::{ScoreBreakdown, StageMinutes};

/// Optimal total-sleep-time band in minutes (7-9 hours)
const OPTIMAL_TST_MIN: f64 = 420.0;
const OPTIMAL_TST_MAX: f64 = 540.0;

/// Component weights in the final combination
const WEIGHT_DURATION: f64 = 0.25;
const WEIGHT_EFFICIENCY: f64 = 0.30;
const WEIGHT_CONTINUITY: f64 = 0.30;
const WEIGHT_STAGES: f64 = 0.15;

/// Flat penalty applied when caffeine was consumed after 14:00
const CAFFEINE_PENALTY: f64 = 5.0;

/// Score total sleep time against the 7-9 hour optimal band.
///
/// 100 inside the band, a linear ramp up to it from below, and a two-slope
/// linear decay above it (100 to 80 over the first hour of excess, then
/// toward 0 at a steeper slope).
pub fn score_duration(tst_min: u32) -> f64 {
    if tst_min == 0 {
        return 0.0;
    }

    let tst = f64::from(tst_min);
    if (OPTIMAL_TST_MIN..=OPTIMAL_TST_MAX).contains(&tst) {
        return 100.0;
    }

    if tst < OPTIMAL_TST_MIN {
        return (tst / OPTIMAL_TST_MIN * 100.0).max(0.0);
    }

    let excess = tst - OPTIMAL_TST_MAX;
    if excess <= 60.0 {
        100.0 - (excess / 60.0) * 20.0
    } else {
        (80.0 - ((excess - 60.0) / 60.0) * 40.0).max(0.0)
    }
}

/// Score sleep efficiency (TST / time in bed) on fixed thresholds.
///
/// Below the 0.75 breakpoint the score falls linearly (`efficiency * 80`),
/// which meets the 60-point tier exactly at 0.75.
pub fn score_efficiency(tst_min: u32, time_in_bed_min: i64) -> f64 {
    if time_in_bed_min <= 0 {
        return 0.0;
    }

    let efficiency = f64::from(tst_min) / time_in_bed_min as f64;

    if efficiency >= 0.95 {
        100.0
    } else if efficiency >= 0.90 {
        90.0
    } else if efficiency >= 0.85 {
        80.0
    } else if efficiency >= 0.75 {
        60.0
    } else {
        (efficiency * 80.0).max(0.0)
    }
}

/// Score sleep continuity from WASO minutes and awakening count.
///
/// The two components are scored on descending breakpoints (strictly-greater
/// for WASO, at-least for awakenings) and combined 60/40.
pub fn score_continuity(waso_min: u32, awakenings: u32) -> f64 {
    let waso_score: f64 = if waso_min > 60 {
        0.0
    } else if waso_min > 30 {
        50.0
    } else if waso_min > 20 {
        75.0
    } else if waso_min > 10 {
        90.0
    } else {
        100.0
    };

    let awakenings_score: f64 = if awakenings >= 5 {
        30.0
    } else if awakenings >= 3 {
        60.0
    } else if awakenings >= 2 {
        80.0
    } else if awakenings == 1 {
        95.0
    } else {
        100.0
    };

    waso_score * 0.6 + awakenings_score * 0.4
}

/// Score the deep/REM stage distribution.
///
/// Starts from a neutral 50 and applies independent adjustments for each
/// stage percentage that is available. A stage reported as zero minutes is
/// treated as absent here ([`StageMinutes::nonzero`]); with no stage data at
/// all, or no sleep, the neutral 50 stands.
pub fn score_stages(deep_min: StageMinutes, rem_min: StageMinutes, tst_min: u32) -> f64 {
    if tst_min == 0 {
        return 50.0;
    }

    let tst = f64::from(tst_min);
    let deep_pct = deep_min.nonzero().map(|m| f64::from(m) / tst);
    let rem_pct = rem_min.nonzero().map(|m| f64::from(m) / tst);

    if deep_pct.is_none() && rem_pct.is_none() {
        return 50.0;
    }

    let mut score: f64 = 50.0;

    if let Some(deep) = deep_pct {
        if (0.15..=0.25).contains(&deep) {
            score += 30.0;
        } else if (0.10..0.15).contains(&deep) || (deep > 0.25 && deep <= 0.30) {
            score += 15.0;
        } else if deep < 0.10 {
            score -= 10.0;
        } else {
            // deep > 0.30
            score += 10.0;
        }
    }

    if let Some(rem) = rem_pct {
        if (0.20..=0.25).contains(&rem) {
            score += 20.0;
        } else if (0.15..0.20).contains(&rem) || (rem > 0.25 && rem <= 0.30) {
            score += 10.0;
        } else if rem < 0.15 {
            score -= 10.0;
        } else {
            // rem > 0.30
            score += 5.0;
        }
    }

    score.clamp(0.0, 100.0)
}

impl ScoreBreakdown {
    /// Combine the four sub-scores into the weighted composite, before the
    /// caffeine penalty, rounding, and clamping applied by the engine.
    pub fn weighted(&self) -> f64 {
        self.duration * WEIGHT_DURATION
            + self.efficiency * WEIGHT_EFFICIENCY
            + self.continuity * WEIGHT_CONTINUITY
            + self.stages * WEIGHT_STAGES
    }
}

/// Lifestyle penalty for the night, currently caffeine only.
pub fn lifestyle_penalty(caffeine_after_14: bool) -> f64 {
    if caffeine_after_14 {
        CAFFEINE_PENALTY
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_optimal_band() {
        assert_eq!(score_duration(420), 100.0);
        assert_eq!(score_duration(480), 100.0);
        assert_eq!(score_duration(540), 100.0);
    }

    #[test]
    fn duration_short_ramp() {
        assert_eq!(score_duration(0), 0.0);
        assert_eq!(score_duration(210), 50.0);
        assert!((score_duration(380) - 380.0 / 420.0 * 100.0).abs() < 1e-9);
        assert!(score_duration(419) < 100.0);
    }

    #[test]
    fn duration_long_decay() {
        // First hour of excess: 100 down to 80
        assert!((score_duration(570) - 90.0).abs() < 1e-9);
        assert!((score_duration(600) - 80.0).abs() < 1e-9);
        // Beyond: steeper slope, 80 down to 40 over the next hour
        assert!((score_duration(630) - 60.0).abs() < 1e-9);
        assert!((score_duration(660) - 40.0).abs() < 1e-9);
        // Floored at zero
        assert_eq!(score_duration(1440), 0.0);
    }

    #[test]
    fn optimal_band_with_perfect_efficiency() {
        // Sleeping the whole time in bed, inside the band: both components max out
        for tst in (420..=540).step_by(10) {
            assert_eq!(score_duration(tst), 100.0);
            assert_eq!(score_efficiency(tst, i64::from(tst)), 100.0);
        }
    }

    #[test]
    fn duration_monotone_below_and_above_band() {
        for tst in 1..420 {
            assert!(score_duration(tst) <= score_duration(tst + 1));
        }
        for tst in 540..900 {
            assert!(score_duration(tst) >= score_duration(tst + 1));
        }
    }

    #[test]
    fn efficiency_tiers() {
        assert_eq!(score_efficiency(480, 480), 100.0); // 1.00
        assert_eq!(score_efficiency(456, 480), 100.0); // 0.95
        assert_eq!(score_efficiency(432, 480), 90.0); // 0.90
        assert_eq!(score_efficiency(408, 480), 80.0); // 0.85
        assert_eq!(score_efficiency(360, 480), 60.0); // 0.75
    }

    #[test]
    fn efficiency_below_lowest_tier_is_linear() {
        // 0.50 efficiency: 0.5 * 80 = 40
        assert!((score_efficiency(240, 480) - 40.0).abs() < 1e-9);
        assert_eq!(score_efficiency(0, 480), 0.0);
    }

    #[test]
    fn efficiency_zero_time_in_bed_guard() {
        assert_eq!(score_efficiency(400, 0), 0.0);
        assert_eq!(score_efficiency(400, -1), 0.0);
    }

    #[test]
    fn continuity_waso_breakpoints() {
        // Strictly-greater comparisons: 20 minutes still scores 100
        assert_eq!(score_continuity(0, 0), 100.0);
        assert_eq!(score_continuity(10, 0), 100.0);
        assert_eq!(score_continuity(11, 0), 94.0); // 90 * 0.6 + 100 * 0.4
        assert_eq!(score_continuity(20, 0), 94.0);
        assert_eq!(score_continuity(21, 0), 85.0); // 75 * 0.6 + 100 * 0.4
        assert_eq!(score_continuity(31, 0), 70.0); // 50 * 0.6 + 100 * 0.4
        assert_eq!(score_continuity(61, 0), 40.0); // 0 * 0.6 + 100 * 0.4
    }

    #[test]
    fn continuity_awakening_breakpoints() {
        assert_eq!(score_continuity(0, 1), 98.0); // 100 * 0.6 + 95 * 0.4
        assert_eq!(score_continuity(0, 2), 92.0);
        assert_eq!(score_continuity(0, 3), 84.0);
        assert_eq!(score_continuity(0, 4), 84.0);
        assert_eq!(score_continuity(0, 5), 72.0);
    }

    #[test]
    fn stages_neutral_without_data() {
        assert_eq!(
            score_stages(StageMinutes::Absent, StageMinutes::Absent, 480),
            50.0
        );
        assert_eq!(
            score_stages(StageMinutes::Minutes(90), StageMinutes::Minutes(100), 0),
            50.0
        );
    }

    #[test]
    fn stages_reported_zero_treated_as_absent() {
        // Regression for the zero-vs-absent rule
        assert_eq!(
            score_stages(StageMinutes::Zero, StageMinutes::Absent, 480),
            score_stages(StageMinutes::Absent, StageMinutes::Absent, 480)
        );
        assert_eq!(
            score_stages(StageMinutes::Zero, StageMinutes::Zero, 480),
            50.0
        );
    }

    #[test]
    fn stages_ideal_percentages() {
        // deep 20% (+30), rem 22.5% (+20): 50 + 50 = 100
        assert_eq!(
            score_stages(StageMinutes::Minutes(96), StageMinutes::Minutes(108), 480),
            100.0
        );
    }

    #[test]
    fn stages_adjacent_bands() {
        // deep 12.5% (+15), rem absent: 65
        assert_eq!(
            score_stages(StageMinutes::Minutes(60), StageMinutes::Absent, 480),
            65.0
        );
        // deep absent, rem 28% (+10): 60
        assert!(
            (score_stages(StageMinutes::Absent, StageMinutes::Minutes(134), 480) - 60.0).abs()
                < 1e-9
        );
    }

    #[test]
    fn stages_low_percentages_subtract() {
        // deep 5% (-10), rem 10% (-10): 30
        assert_eq!(
            score_stages(StageMinutes::Minutes(24), StageMinutes::Minutes(48), 480),
            30.0
        );
    }

    #[test]
    fn stages_excess_percentages() {
        // deep 40% (+10), rem 40% (+5): 65
        assert_eq!(
            score_stages(StageMinutes::Minutes(192), StageMinutes::Minutes(192), 480),
            65.0
        );
    }

    #[test]
    fn weighted_combination() {
        let breakdown = ScoreBreakdown {
            duration: 100.0,
            efficiency: 100.0,
            continuity: 100.0,
            stages: 100.0,
        };
        assert_eq!(breakdown.weighted(), 100.0);

        let breakdown = ScoreBreakdown {
            duration: 80.0,
            efficiency: 60.0,
            continuity: 90.0,
            stages: 50.0,
        };
        // 20 + 18 + 27 + 7.5
        assert!((breakdown.weighted() - 72.5).abs() < 1e-9);
    }

    #[test]
    fn caffeine_penalty_flat() {
        assert_eq!(lifestyle_penalty(false), 0.0);
        assert_eq!(lifestyle_penalty(true), 5.0);
    }
}
