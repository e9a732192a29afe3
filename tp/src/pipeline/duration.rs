//! Week-count extraction from goal text

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Default budget when the goal names no duration
pub const DEFAULT_WEEKS: u32 = 8;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Units are matched as prefixes, so plurals ("months", "weeks") hit too.
    Regex::new(r"(\d+)\s*(month|week)").expect("duration pattern is valid")
});

/// Extract a duration in weeks from the goal text
///
/// Scans case-insensitively for `<integer> month` or `<integer> week`;
/// the leftmost match wins. Months normalize to 4 weeks each. Goals with no
/// match, a zero value, or an unparseable digit run get [`DEFAULT_WEEKS`].
/// The result is always a positive integer.
pub fn extract_duration(goal: &str) -> u32 {
    let lowered = goal.to_lowercase();

    let Some(caps) = DURATION_RE.captures(&lowered) else {
        debug!("extract_duration: no match, using default");
        return DEFAULT_WEEKS;
    };

    let value: u32 = match caps[1].parse() {
        Ok(v) if v > 0 => v,
        _ => {
            debug!("extract_duration: zero or unparseable value, using default");
            return DEFAULT_WEEKS;
        }
    };

    let weeks = if caps[2].contains("month") { value * 4 } else { value };
    debug!(%weeks, "extract_duration: matched");
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_normalize_to_weeks() {
        assert_eq!(extract_duration("Launch a product in 3 months"), 12);
        assert_eq!(extract_duration("finish in 1 month"), 4);
    }

    #[test]
    fn test_weeks_pass_through() {
        assert_eq!(extract_duration("Build an MVP in 6 weeks"), 6);
        assert_eq!(extract_duration("ship in 1 week"), 1);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_duration("Deliver in 2 MONTHS"), 8);
        assert_eq!(extract_duration("Deliver in 5 Weeks"), 5);
    }

    #[test]
    fn test_leftmost_match_wins() {
        assert_eq!(extract_duration("2 weeks of prep then 3 months of work"), 2);
    }

    #[test]
    fn test_no_duration_defaults() {
        assert_eq!(extract_duration("Organize the team offsite"), DEFAULT_WEEKS);
        assert_eq!(extract_duration(""), DEFAULT_WEEKS);
    }

    #[test]
    fn test_zero_value_defaults() {
        assert_eq!(extract_duration("do it in 0 weeks"), DEFAULT_WEEKS);
    }

    #[test]
    fn test_huge_value_defaults() {
        // Overflows u32, falls back rather than panicking
        assert_eq!(extract_duration("plan for 99999999999999 weeks"), DEFAULT_WEEKS);
    }

    #[test]
    fn test_number_glued_to_unit() {
        assert_eq!(extract_duration("sprint of 2weeks"), 2);
    }

    #[test]
    fn test_always_positive() {
        for goal in ["", "no numbers here", "0 months", "12 weeks", "1 month"] {
            assert!(extract_duration(goal) >= 1);
        }
    }
}
