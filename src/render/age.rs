use chrono::{DateTime, Utc};

const SECONDS_PER_HOUR: i64 = 60 * 60;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Coarse age of a timestamp in a single unit: "42m", "5h", "12d"
pub fn format_age(timestamp: &DateTime<Utc>) -> String {
    format_age_at(timestamp, &Utc::now())
}

/// Same as [`format_age`], measured against `now`; future timestamps read as "0m"
pub fn format_age_at(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*timestamp).num_seconds().max(0);

    if seconds < SECONDS_PER_HOUR {
        format!("{}m", seconds / 60)
    } else if seconds < SECONDS_PER_DAY {
        format!("{}h", seconds / SECONDS_PER_HOUR)
    } else {
        format!("{}d", seconds / SECONDS_PER_DAY)
    }
}
