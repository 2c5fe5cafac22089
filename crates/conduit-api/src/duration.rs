//! Duration grammar used for metric time windows.
//!
//! A duration is an optionally signed sequence of decimal numbers, each with an
//! optional fraction and a mandatory unit suffix, such as `300ms`, `-1.5h` or `2h45m`.
//! Valid units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m`, `h`.

use thiserror::Error;
use time::Duration;

/// `|i64::MIN|` in nanoseconds: the largest magnitude a duration may reach.
const MAX_MAGNITUDE: u64 = 1 << 63;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Errors produced while parsing a duration.
///
/// Messages are part of the public API response and are matched literally by callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("time: invalid duration {0}")]
    Invalid(String),

    #[error("time: missing unit in duration {0}")]
    MissingUnit(String),

    #[error("time: unknown unit {unit} in duration {input}")]
    UnknownUnit { unit: String, input: String },
}

/// Parses a duration string such as `"60s"` or `"1h15m30.5s"`.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());

    let mut s = input;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid());
        }

        let (whole, rest) = leading_int(s).ok_or_else(invalid)?;
        let has_whole = rest.len() != s.len();
        s = rest;

        let mut fraction = 0;
        let mut scale = 1.0;
        let mut has_fraction = false;
        if let Some(rest) = s.strip_prefix('.') {
            let (f, sc, rest_after) = leading_fraction(rest);
            has_fraction = rest_after.len() != rest.len();
            fraction = f;
            scale = sc;
            s = rest_after;
        }
        if !has_whole && !has_fraction {
            return Err(invalid());
        }

        let unit_len = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let (unit_str, rest) = s.split_at(unit_len);
        s = rest;
        let unit = unit_nanos(unit_str).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit_str.to_string(),
            input: input.to_string(),
        })?;

        if whole > MAX_MAGNITUDE / unit {
            return Err(invalid());
        }
        let mut value = whole * unit;
        if fraction > 0 {
            // Fraction is scaled into the unit and truncated.
            value += (fraction as f64 * (unit as f64 / scale)) as u64;
            if value > MAX_MAGNITUDE {
                return Err(invalid());
            }
        }

        total = total.checked_add(value).ok_or_else(invalid)?;
        if total > MAX_MAGNITUDE {
            return Err(invalid());
        }
    }

    if negative {
        // total <= 2^63, so the wrapping cast lands exactly on i64::MIN at the limit.
        return Ok(Duration::nanoseconds((total as i64).wrapping_neg()));
    }
    if total > i64::MAX as u64 {
        return Err(invalid());
    }
    Ok(Duration::nanoseconds(total as i64))
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Consumes leading digits; `None` on overflow past `2^63`.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut x: u64 = 0;
    for b in s[..end].bytes() {
        if x > MAX_MAGNITUDE / 10 {
            return None;
        }
        x = x * 10 + u64::from(b - b'0');
        if x > MAX_MAGNITUDE {
            return None;
        }
    }
    Some((x, &s[end..]))
}

/// Consumes leading fraction digits, returning the value and its decimal scale.
///
/// Digits past the representable precision are consumed but ignored.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut x: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    for b in s[..end].bytes() {
        if overflow {
            continue;
        }
        if x > (MAX_MAGNITUDE - 1) / 10 {
            overflow = true;
            continue;
        }
        let y = x * 10 + u64::from(b - b'0');
        if y > MAX_MAGNITUDE {
            overflow = true;
            continue;
        }
        x = y;
        scale *= 10.0;
    }
    (x, scale, &s[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_durations() {
        assert_eq!(parse_duration("60s").unwrap(), Duration::seconds(60));
        assert_eq!(parse_duration("1m").unwrap(), Duration::minutes(1));
        assert_eq!(parse_duration("2h").unwrap(), Duration::hours(2));
        assert_eq!(parse_duration("300ms").unwrap(), Duration::milliseconds(300));
        assert_eq!(parse_duration("10us").unwrap(), Duration::microseconds(10));
        assert_eq!(parse_duration("10µs").unwrap(), Duration::microseconds(10));
        assert_eq!(parse_duration("10μs").unwrap(), Duration::microseconds(10));
        assert_eq!(parse_duration("7ns").unwrap(), Duration::nanoseconds(7));
    }

    #[test]
    fn parses_zero_signs_and_compound_terms() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("+5s").unwrap(), Duration::seconds(5));
        assert_eq!(parse_duration("-1m").unwrap(), Duration::minutes(-1));
        assert_eq!(
            parse_duration("1h15m30s").unwrap(),
            Duration::seconds(3600 + 15 * 60 + 30)
        );
    }

    #[test]
    fn parses_fractions() {
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::milliseconds(500));
        assert_eq!(parse_duration("1.s").unwrap(), Duration::seconds(1));
        assert_eq!(parse_duration("-1.5m").unwrap(), Duration::seconds(-90));
    }

    #[test]
    fn rejects_missing_unit() {
        assert_eq!(
            parse_duration("1").unwrap_err().to_string(),
            "time: missing unit in duration 1"
        );
        assert_eq!(
            parse_duration("1m30").unwrap_err().to_string(),
            "time: missing unit in duration 1m30"
        );
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["s", "", "-", "+", ".", ".s", "m1", "1m ", " 1m", "1,5s"] {
            let err = parse_duration(input).unwrap_err();
            assert!(
                matches!(err, DurationError::Invalid(_) | DurationError::UnknownUnit { .. }),
                "unexpected error for {input:?}: {err}"
            );
        }
        assert_eq!(
            parse_duration("s").unwrap_err().to_string(),
            "time: invalid duration s"
        );
        assert_eq!(
            parse_duration("").unwrap_err().to_string(),
            "time: invalid duration "
        );
    }

    #[test]
    fn rejects_unknown_units() {
        assert_eq!(
            parse_duration("5d").unwrap_err().to_string(),
            "time: unknown unit d in duration 5d"
        );
        assert_eq!(
            parse_duration("1m ").unwrap_err().to_string(),
            "time: unknown unit m  in duration 1m "
        );
    }

    #[test]
    fn enforces_i64_nanosecond_range() {
        assert_eq!(
            parse_duration("9223372036854775807ns").unwrap(),
            Duration::nanoseconds(i64::MAX)
        );
        assert_eq!(
            parse_duration("-9223372036854775808ns").unwrap(),
            Duration::nanoseconds(i64::MIN)
        );
        for input in [
            "9223372036854775808ns",
            "9223372036854775808000000000000ns",
            "3000000h",
            "2562047h48m",
        ] {
            assert_eq!(
                parse_duration(input).unwrap_err(),
                DurationError::Invalid(input.to_string())
            );
        }
    }
}
