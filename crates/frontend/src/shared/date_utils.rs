/// Utilities for date and time formatting
///
/// Provides consistent date/time rendering across the welcome page lists
use chrono::{DateTime, Utc};

/// Format a timestamp as DD.MM.YYYY HH:MM
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// Humanized distance from `dt` to `now`, e.g. "3 hours ago"
pub fn time_ago(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(*dt);
    let seconds = delta.num_seconds();
    if seconds < 0 {
        return "in the future".to_string();
    }
    if seconds < 45 {
        return "a few seconds ago".to_string();
    }

    let (value, unit) = if delta.num_minutes() < 60 {
        (delta.num_minutes().max(1), "minute")
    } else if delta.num_hours() < 24 {
        (delta.num_hours(), "hour")
    } else if delta.num_days() < 30 {
        (delta.num_days(), "day")
    } else if delta.num_days() < 365 {
        (delta.num_days() / 30, "month")
    } else {
        (delta.num_days() / 365, "year")
    };

    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}

/// `time_ago` relative to the browser clock
pub fn time_ago_now(dt: &DateTime<Utc>) -> String {
    time_ago(dt, &Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(&base()), "15.03.2024 14:02");
    }

    #[test]
    fn test_time_ago() {
        let now = base();
        assert_eq!(time_ago(&(now - Duration::seconds(10)), &now), "a few seconds ago");
        assert_eq!(time_ago(&(now - Duration::seconds(50)), &now), "1 minute ago");
        assert_eq!(time_ago(&(now - Duration::minutes(5)), &now), "5 minutes ago");
        assert_eq!(time_ago(&(now - Duration::hours(1)), &now), "1 hour ago");
        assert_eq!(time_ago(&(now - Duration::hours(23)), &now), "23 hours ago");
        assert_eq!(time_ago(&(now - Duration::days(2)), &now), "2 days ago");
        assert_eq!(time_ago(&(now - Duration::days(65)), &now), "2 months ago");
        assert_eq!(time_ago(&(now - Duration::days(800)), &now), "2 years ago");
    }

    #[test]
    fn test_time_ago_future() {
        let now = base();
        assert_eq!(time_ago(&(now + Duration::minutes(1)), &now), "in the future");
    }
}
