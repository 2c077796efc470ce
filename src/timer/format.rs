//! Duration parsing and formatting.
//!
//! Shared by the CLI (human-entered durations like "25m" or "1h30m") and the
//! renderer (MM:SS countdown display).

use chrono::Duration;

/// Format a duration as MM:SS, clamping negatives to `00:00`.
///
/// Minutes are total minutes, so long phases read `90:00` rather than
/// rolling into hours.
#[must_use]
pub fn format_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().max(0);
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Parse a duration string like "25m", "1h30m", "90s".
///
/// A bare number is taken as minutes. Returns `None` for empty, malformed,
/// or non-positive input.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();

    // Try parsing as just a number (assume minutes)
    if let Ok(minutes) = s.parse::<i64>() {
        if minutes <= 0 {
            return None;
        }
        return Some(Duration::minutes(minutes));
    }

    let mut total_seconds: i64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else if !current_num.is_empty() {
            let num: i64 = current_num.parse().ok()?;
            current_num.clear();

            match c {
                'h' => total_seconds += num * 3600,
                'm' => total_seconds += num * 60,
                's' => total_seconds += num,
                _ => return None,
            }
        } else {
            return None;
        }
    }

    // Handle trailing number without unit (assume minutes)
    if !current_num.is_empty() {
        let num: i64 = current_num.parse().ok()?;
        total_seconds += num * 60;
    }

    if total_seconds > 0 {
        Some(Duration::seconds(total_seconds))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(Duration::minutes(25)), "25:00");
        assert_eq!(format_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_mmss(Duration::seconds(0)), "00:00");
        assert_eq!(format_mmss(Duration::minutes(90)), "90:00");
    }

    #[test]
    fn test_format_mmss_clamps_negative() {
        assert_eq!(format_mmss(Duration::seconds(-5)), "00:00");
    }

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration("25"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration("25m"), Some(Duration::minutes(25)));
    }

    #[test]
    fn test_parse_duration_hours() {
        assert_eq!(parse_duration("1h"), Some(Duration::hours(1)));
        assert_eq!(parse_duration("2h30m"), Some(Duration::minutes(150)));
    }

    #[test]
    fn test_parse_duration_seconds() {
        assert_eq!(parse_duration("90s"), Some(Duration::seconds(90)));
        assert_eq!(parse_duration("1m30s"), Some(Duration::seconds(90)));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_none());
        assert!(parse_duration("abc").is_none());
        assert!(parse_duration("0").is_none());
        assert!(parse_duration("-5").is_none());
    }
}
