//! Time-in-bed derivation
//!
//! Bedtime and wake time arrive as "HH:MM" wall-clock strings with no date
//! attached. A wake time earlier than bedtime by clock value means the sleep
//! period crossed midnight, so the wake instant is rolled into the next day.

use chrono::NaiveTime;

use crate::error::ScoreError;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse an "HH:MM" 24-hour clock string.
pub fn parse_clock(value: &str) -> Result<NaiveTime, ScoreError> {
    Ok(NaiveTime::parse_from_str(value, "%H:%M")?)
}

/// Derive time in bed (whole minutes) from bedtime and wake time.
///
/// Returns [`ScoreError::InvalidInterval`] when the derived duration is not
/// strictly positive, which the rollover rule reduces to the equal-timestamp
/// case.
pub fn time_in_bed_min(bedtime: &str, wake_time: &str) -> Result<i64, ScoreError> {
    let bed = parse_clock(bedtime)?;
    let wake = parse_clock(wake_time)?;

    let mut minutes = wake.signed_duration_since(bed).num_minutes();
    if wake < bed {
        minutes += MINUTES_PER_DAY;
    }

    if minutes <= 0 {
        return Err(ScoreError::InvalidInterval {
            bedtime: bedtime.to_string(),
            wake_time: wake_time.to_string(),
        });
    }

    Ok(minutes)
}
