//! Recommendation generation
//!
//! A fixed, ordered rule list. Each rule is evaluated independently and
//! appends its message when the condition holds, so several can fire for one
//! night. The order is part of the output contract and must not change.
//!
//! Messages are produced by explicit formatting functions so the generator
//! stays a pure, locale-free unit.

/// Inputs the recommendation rules look at, already derived by the engine.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationInputs {
    pub efficiency: f64,
    pub waso_min: u32,
    pub awakenings: u32,
    /// Deep-sleep fraction of TST; `Some(0.0)` when the device reported
    /// zero minutes (unlike stage scoring, zero counts as a measurement here)
    pub deep_pct: Option<f64>,
    /// REM fraction of TST, same presence rule as `deep_pct`
    pub rem_pct: Option<f64>,
    pub caffeine_after_14: bool,
    pub tst_min: u32,
}

/// Format a minute count as "Xh Ymin".
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}min", minutes / 60, minutes % 60)
}

fn efficiency_advice() -> String {
    "Improve sleep efficiency by reducing time awake in bed. If you can't fall asleep \
     within 15-20 minutes, get up and do something relaxing."
        .to_string()
}

fn waso_advice(waso_min: u32) -> String {
    format!(
        "Reduce wake time after sleep onset ({waso_min} min). Avoid screens 1 hour before \
         bed and heavy meals 2-3 hours before sleep."
    )
}

fn interruptions_advice(awakenings: u32) -> String {
    format!(
        "Minimize sleep interruptions ({awakenings} awakenings). Consider limiting evening \
         fluids, avoiding alcohol, and ensuring a comfortable sleep environment."
    )
}

fn short_duration_advice(tst_min: u32) -> String {
    format!(
        "Increase total sleep time ({}). Aim for 7-9 hours of sleep for optimal rest.",
        format_duration(tst_min)
    )
}

fn long_duration_advice(tst_min: u32) -> String {
    format!(
        "Your sleep duration ({}) is longer than optimal. Consider if you're getting \
         enough quality rest.",
        format_duration(tst_min)
    )
}

fn deep_sleep_advice() -> String {
    "Increase deep sleep by getting regular exercise, maintaining a consistent sleep \
     schedule, and avoiding late-evening meals."
        .to_string()
}

fn rem_advice() -> String {
    "Improve REM sleep by maintaining consistent bedtimes and wake times, even on weekends."
        .to_string()
}

fn caffeine_advice() -> String {
    "Avoid caffeine after 2 PM to prevent sleep disruption and improve sleep quality.".to_string()
}

fn maintain_advice() -> String {
    "Excellent sleep! Maintain your current healthy sleep habits.".to_string()
}

/// Generate the ordered recommendation list for one night.
pub fn recommendations(inputs: &RecommendationInputs) -> Vec<String> {
    let mut out = Vec::new();

    if inputs.efficiency < 0.85 {
        out.push(efficiency_advice());
    }

    if inputs.waso_min > 20 {
        out.push(waso_advice(inputs.waso_min));
    }

    if inputs.awakenings >= 3 {
        out.push(interruptions_advice(inputs.awakenings));
    }

    if inputs.tst_min < 420 {
        out.push(short_duration_advice(inputs.tst_min));
    } else if inputs.tst_min > 540 {
        out.push(long_duration_advice(inputs.tst_min));
    }

    if matches!(inputs.deep_pct, Some(pct) if pct < 0.15) {
        out.push(deep_sleep_advice());
    }

    if matches!(inputs.rem_pct, Some(pct) if pct < 0.15) {
        out.push(rem_advice());
    }

    if inputs.caffeine_after_14 {
        out.push(caffeine_advice());
    }

    if out.is_empty() {
        out.push(maintain_advice());
    }

    out
}
