use chrono::{DateTime, Local, Utc};

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

/// Format a record timestamp relative to the current time:
/// - under a minute: "just now"
/// - under an hour: "5 minutes ago"
/// - under a day: "3 hours ago"
/// - older: local date and time, "Mar 5, 14:07"
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    format_time_at(timestamp, &Utc::now())
}

/// [`format_time`] for an ISO-8601 string such as a record's persisted `timestamp`
pub fn format_time_str(timestamp: &str) -> Result<String, chrono::ParseError> {
    let parsed = timestamp.parse::<DateTime<Utc>>()?;
    Ok(format_time(&parsed))
}

/// [`format_time`] against an explicit "now"
pub fn format_time_at(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed_ms = now.signed_duration_since(*timestamp).num_milliseconds();

    // Timestamps from the future count as "just now"
    if elapsed_ms < MINUTE_MS {
        "just now".to_string()
    } else if elapsed_ms < HOUR_MS {
        plural(elapsed_ms / MINUTE_MS, "minute")
    } else if elapsed_ms < DAY_MS {
        plural(elapsed_ms / HOUR_MS, "hour")
    } else {
        format_absolute(timestamp)
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 { format!("1 {} ago", unit) } else { format!("{} {}s ago", count, unit) }
}

fn format_absolute(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%b %-d, %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_762_076_480_016).unwrap()
    }

    #[test]
    fn test_just_now() {
        let now = now();
        assert_eq!(format_time_at(&(now - Duration::milliseconds(30_000)), &now), "just now");
        assert_eq!(format_time_at(&(now - Duration::milliseconds(59_999)), &now), "just now");
    }

    #[test]
    fn test_future_timestamp() {
        let now = now();
        assert_eq!(format_time_at(&(now + Duration::hours(2)), &now), "just now");
    }

    #[test]
    fn test_minutes() {
        let now = now();
        assert_eq!(format_time_at(&(now - Duration::milliseconds(120_000)), &now), "2 minutes ago");
        assert_eq!(format_time_at(&(now - Duration::milliseconds(60_000)), &now), "1 minute ago");
        assert_eq!(
            format_time_at(&(now - Duration::milliseconds(3_599_999)), &now),
            "59 minutes ago"
        );
    }

    #[test]
    fn test_hours() {
        let now = now();
        assert_eq!(format_time_at(&(now - Duration::milliseconds(7_200_000)), &now), "2 hours ago");
        assert_eq!(format_time_at(&(now - Duration::milliseconds(3_600_000)), &now), "1 hour ago");
        assert_eq!(
            format_time_at(&(now - Duration::milliseconds(86_399_999)), &now),
            "23 hours ago"
        );
    }

    #[test]
    fn test_absolute_after_a_day() {
        let now = now();
        let timestamp = now - Duration::milliseconds(90_000_000);

        let formatted = format_time_at(&timestamp, &now);
        assert!(!formatted.contains("ago"));
        assert_eq!(formatted, timestamp.with_timezone(&Local).format("%b %-d, %H:%M").to_string());
    }

    #[test]
    fn test_format_time_str() {
        let recent = (Utc::now() - Duration::minutes(2)).to_rfc3339();
        assert_eq!(format_time_str(&recent).unwrap(), "2 minutes ago");
        assert!(format_time_str("yesterday-ish").is_err());
    }

    #[test]
    fn test_format_time_uses_current_clock() {
        let recent = Utc::now() - Duration::seconds(30);
        assert_eq!(format_time(&recent), "just now");
    }
}
