// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Conversions from raw cell text to typed values

use std::time::Duration;

use thiserror::Error;

const SECONDS_PER_DAY: u64 = 24 * 3600;

/// Cell text did not match the expected encoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("not a number: {0:?}")]
    MalformedNumber(String),
    #[error("not a duration: {0:?}")]
    MalformedDuration(String),
}

/// Parse modem uptime text to a duration
///
/// Accepts `"<days> days <H>:<MM>:<SS>"` as well as the unit-suffixed
/// variant some firmware prints, e.g. `"5 days 01h:02m:03s"`.
///
/// # Errors
///
/// Returns `UnitError::MalformedDuration` if the day count or the
/// time-of-day part does not parse.
pub fn parse_uptime(text: &str) -> Result<Duration, UnitError> {
    let malformed = || UnitError::MalformedDuration(text.to_string());

    let (days, clock) = text.split_once("days ").ok_or_else(malformed)?;
    let days: u64 = days.trim().parse().map_err(|_| malformed())?;
    let clock = parse_clock(clock).ok_or_else(malformed)?;

    days.checked_mul(SECONDS_PER_DAY)
        .and_then(|secs| secs.checked_add(clock))
        .map(Duration::from_secs)
        .ok_or_else(malformed)
}

/// Parse a float after stripping a unit suffix such as `" dBmV"`
///
/// # Errors
///
/// Returns `UnitError::MalformedNumber` on non-numeric input.
pub fn parse_suffixed_float(text: &str, suffix: &str) -> Result<f64, UnitError> {
    let trimmed = text.trim();
    let value = trimmed.strip_suffix(suffix).unwrap_or(trimmed);
    parse_plain_float(value)
}

/// Parse a bare decimal integer or float
///
/// # Errors
///
/// Returns `UnitError::MalformedNumber` on non-numeric input.
pub fn parse_plain_float(text: &str) -> Result<f64, UnitError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| UnitError::MalformedNumber(text.to_string()))
}

/// Seconds in an `H:MM:SS` or `01h:02m:03s` time of day
fn parse_clock(text: &str) -> Option<u64> {
    let parts: Vec<&str> = text.trim().split(':').map(str::trim).collect();
    if parts.len() == 3 && parts.iter().all(|p| is_digits(p)) {
        let h = parts[0].parse::<u64>().ok()?;
        let m = parts[1].parse::<u64>().ok()?;
        let s = parts[2].parse::<u64>().ok()?;
        return h
            .checked_mul(3600)?
            .checked_add(m.checked_mul(60)?)?
            .checked_add(s);
    }
    parse_compact_duration(&parts.concat())
}

/// Seconds in a compact literal like `1h5m30s`; every number needs a unit
fn parse_compact_duration(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }
    let mut total = 0u64;
    let mut num = String::new();
    for ch in s.chars() {
        if ch.is_ascii_digit() {
            num.push(ch);
            continue;
        }
        if num.is_empty() {
            return None;
        }
        let value = num.parse::<u64>().ok()?;
        let unit_seconds = match ch {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return None,
        };
        total = total.checked_add(value.checked_mul(unit_seconds)?)?;
        num.clear();
    }
    // trailing number without a unit
    if !num.is_empty() {
        return None;
    }
    Some(total)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uptime_clock() {
        let uptime = parse_uptime("3 days 04:15:02").unwrap();
        assert_eq!(uptime.as_secs(), 3 * 86400 + 4 * 3600 + 15 * 60 + 2);
    }

    #[test]
    fn test_parse_uptime_unit_suffixed() {
        let uptime = parse_uptime("5 days 01h:02m:03s").unwrap();
        assert_eq!(uptime.as_secs(), 5 * 86400 + 3723);
        assert_eq!(parse_uptime("5 days 01:02:03").unwrap(), uptime);
    }

    #[test]
    fn test_parse_uptime_zero_days() {
        let uptime = parse_uptime("0 days 00:00:09").unwrap();
        assert_eq!(uptime.as_secs(), 9);
    }

    #[test]
    fn test_parse_uptime_irregular_spacing() {
        let uptime = parse_uptime("  12  days  1:02:03 ").unwrap();
        assert_eq!(uptime.as_secs(), 12 * 86400 + 3723);
    }

    #[test]
    fn test_parse_uptime_rejects_missing_days() {
        assert_eq!(
            parse_uptime("04:15:02"),
            Err(UnitError::MalformedDuration("04:15:02".to_string()))
        );
    }

    #[test]
    fn test_parse_uptime_rejects_bad_day_count() {
        assert!(parse_uptime("three days 04:15:02").is_err());
        assert!(parse_uptime("-1 days 04:15:02").is_err());
    }

    #[test]
    fn test_parse_uptime_rejects_bad_clock() {
        assert!(parse_uptime("3 days ").is_err());
        assert!(parse_uptime("3 days 04:15").is_err());
        assert!(parse_uptime("3 days 04:xx:02").is_err());
        assert!(parse_uptime("3 days 041502").is_err());
    }

    #[test]
    fn test_parse_uptime_rejects_overflowing_clock() {
        let text = "3 days 99999999999999999:00:00";
        assert_eq!(
            parse_uptime(text),
            Err(UnitError::MalformedDuration(text.to_string()))
        );
        assert!(parse_uptime("3 days 99999999999999999h:00m:00s").is_err());
    }

    #[test]
    fn test_parse_suffixed_float() {
        assert_eq!(parse_suffixed_float("35.2 dBmV", " dBmV"), Ok(35.2));
        assert_eq!(parse_suffixed_float(" -4.7 dBmV ", " dBmV"), Ok(-4.7));
        assert_eq!(parse_suffixed_float("41 dB", " dB"), Ok(41.0));
    }

    #[test]
    fn test_parse_suffixed_float_without_suffix() {
        assert_eq!(parse_suffixed_float("38.9", " dB"), Ok(38.9));
    }

    #[test]
    fn test_parse_suffixed_float_rejects_text() {
        assert_eq!(
            parse_suffixed_float("---- dBmV", " dBmV"),
            Err(UnitError::MalformedNumber("----".to_string()))
        );
        assert!(parse_suffixed_float("", " dB").is_err());
    }

    #[test]
    fn test_parse_plain_float() {
        assert_eq!(parse_plain_float("10"), Ok(10.0));
        assert_eq!(parse_plain_float("1234567"), Ok(1_234_567.0));
        assert!(parse_plain_float("10 packets").is_err());
    }

    #[test]
    fn test_parse_compact_duration() {
        assert_eq!(parse_compact_duration("1h5m"), Some(3900));
        assert_eq!(parse_compact_duration("30s"), Some(30));
        assert_eq!(parse_compact_duration("30"), None);
        assert_eq!(parse_compact_duration("5x"), None);
        assert_eq!(parse_compact_duration("1d2h"), None);
    }
}
