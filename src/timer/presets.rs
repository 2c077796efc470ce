//! Fixed duration choices offered by the selection menu.
//!
//! The menu hands back label strings; the driver maps them to durations
//! through the table here. Labels not in the table are a hard error, so a
//! menu/table mismatch cannot silently produce a zero-length phase.

use chrono::Duration;

use crate::error::TomoError;

/// Work period choices, shortest first.
pub const WORK_CHOICES: &[&str] = &["15 mins", "25 mins", "50 mins"];

/// Rest period choices, shortest first.
pub const REST_CHOICES: &[&str] = &["5 mins", "10 mins", "15 mins"];

/// Map a menu label to its duration.
///
/// # Errors
///
/// Returns `TomoError::InvalidSelection` for labels outside the table.
pub fn duration_for(label: &str) -> Result<Duration, TomoError> {
    match label {
        "5 mins" => Ok(Duration::minutes(5)),
        "10 mins" => Ok(Duration::minutes(10)),
        "15 mins" => Ok(Duration::minutes(15)),
        "25 mins" => Ok(Duration::minutes(25)),
        "50 mins" => Ok(Duration::minutes(50)),
        other => Err(TomoError::InvalidSelection(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_choice_has_a_duration() {
        for label in WORK_CHOICES.iter().chain(REST_CHOICES) {
            assert!(duration_for(label).is_ok(), "no duration for {label}");
        }
    }

    #[test]
    fn test_lookup_values() {
        assert_eq!(duration_for("25 mins").unwrap(), Duration::minutes(25));
        assert_eq!(duration_for("5 mins").unwrap(), Duration::minutes(5));
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let result = duration_for("45 mins");
        assert!(matches!(result, Err(TomoError::InvalidSelection(_))));
    }
}
