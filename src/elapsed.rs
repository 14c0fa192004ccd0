//! Elapsed-time sentences for the panel and menu

use chrono::{DateTime, Utc};

/// Human sentence for the time since a reading was observed.
///
/// Minutes are floored. Future timestamps (clock skew between the
/// feed server and this host) clamp to "just now" instead of leaking
/// a negative count into the sentence.
pub fn format(observed: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - observed).num_minutes().max(0);

    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes == 1 {
        return "1 minute ago".to_string();
    }
    if minutes < 60 {
        return format!("{} minutes ago", minutes);
    }

    let hours = minutes / 60;
    if hours == 1 {
        "1 hour ago".to_string()
    } else {
        format!("{} hours ago", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_just_now() {
        assert_eq!(format(now() - Duration::seconds(45), now()), "just now");
    }

    #[test]
    fn test_singular_minute() {
        assert_eq!(format(now() - Duration::seconds(90), now()), "1 minute ago");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(
            format(now() - Duration::minutes(45), now()),
            "45 minutes ago"
        );
    }

    #[test]
    fn test_singular_hour() {
        assert_eq!(format(now() - Duration::seconds(3700), now()), "1 hour ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format(now() - Duration::hours(5), now()), "5 hours ago");
    }

    #[test]
    fn test_future_timestamp_clamps_to_just_now() {
        assert_eq!(format(now() + Duration::minutes(10), now()), "just now");
    }
}
