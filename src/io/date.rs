//! Calendar date to J2000-relative day count.

use std::str::FromStr;

use hifitime::Epoch;

use crate::error::{SimError, SimResult};
use crate::simulation::constants::J2000_JD;

/// Days elapsed since J2000.0 (2000-01-01T12:00:00) for a date string.
///
/// Accepts a plain `YYYY-MM-DD` calendar date (taken at midnight UTC) or any
/// epoch string hifitime can parse, e.g. `2024-03-01T06:00:00 UTC`.
pub fn days_since_j2000(input: &str) -> SimResult<f64> {
    let epoch = parse_epoch(input.trim())?;
    Ok(epoch.to_jde_utc_days() - J2000_JD)
}

fn parse_epoch(text: &str) -> SimResult<Epoch> {
    let invalid = |reason: String| SimError::InvalidDate {
        input: text.to_string(),
        reason,
    };

    if let Some((y, m, d)) = split_calendar_date(text) {
        return Epoch::maybe_from_gregorian_utc(y, m, d, 0, 0, 0, 0)
            .map_err(|e| invalid(e.to_string()));
    }
    Epoch::from_str(text).map_err(|e| invalid(e.to_string()))
}

fn split_calendar_date(text: &str) -> Option<(i32, u8, u8)> {
    let mut parts = text.splitn(3, '-');
    let y = parts.next()?.parse().ok()?;
    let m = parts.next()?.parse().ok()?;
    let d = parts.next()?.parse().ok()?;
    Some((y, m, d))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn j2000_midnight_is_half_a_day_before() {
        assert_relative_eq!(days_since_j2000("2000-01-01").unwrap(), -0.5, epsilon = 1e-6);
    }

    #[test]
    fn counts_leap_years() {
        // 2000 and 2004 are leap years
        let days = days_since_j2000("2005-01-01").unwrap();
        assert_relative_eq!(days, 5.0 * 365.0 + 2.0 - 0.5, epsilon = 1e-6);
    }

    #[test]
    fn accepts_full_epoch_strings() {
        let days = days_since_j2000("2000-01-01T12:00:00 UTC").unwrap();
        assert_relative_eq!(days, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(days_since_j2000("yesterday"), Err(SimError::InvalidDate { .. })));
        assert!(days_since_j2000("2001-02-30").is_err());
    }
}
