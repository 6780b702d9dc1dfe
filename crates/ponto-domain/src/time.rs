//! Time-of-day parsing and minute formatting for punch values.
//!
//! Punch times are stored as the raw `HH:MM` text the user produced; anything
//! that fails to parse simply contributes nothing to a calculation.

/// Parses a strict `HH:MM` value into minutes since midnight.
///
/// Accepts a one- or two-digit hour (0–23) and exactly two minute digits
/// (0–59). Returns `None` for anything else, including the empty string.
pub fn parse_hhmm(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let (hours, minutes) = trimmed.split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().all(|b| b.is_ascii_digit()) || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let h: i64 = hours.parse().ok()?;
    let m: i64 = minutes.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// Renders a minute count as `H:MM`, with a leading `-` when negative.
///
/// The hour part is unpadded, minutes are always two digits; zero renders as
/// `0:00`.
pub fn format_minutes(total: i64) -> String {
    let sign = if total < 0 { "-" } else { "" };
    let abs = total.abs();
    format!("{}{}:{:02}", sign, abs / 60, abs % 60)
}

/// Minutes covered by one in/out pair.
///
/// Contributes 0 unless both endpoints parse and the out-time is not before
/// the in-time; never negative.
pub fn interval_minutes(clock_in: Option<&str>, clock_out: Option<&str>) -> i64 {
    let start = clock_in.and_then(parse_hhmm);
    let end = clock_out.and_then(parse_hhmm);
    match (start, end) {
        (Some(start), Some(end)) if end >= start => end - start,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_valid_times() {
        assert_eq!(parse_hhmm("08:00"), Some(480));
        assert_eq!(parse_hhmm("8:00"), Some(480));
        assert_eq!(parse_hhmm("23:59"), Some(1439));
        assert_eq!(parse_hhmm("0:00"), Some(0));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(parse_hhmm(""), None);
        assert_eq!(parse_hhmm("8"), None);
        assert_eq!(parse_hhmm("8:0"), None);
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("12:60"), None);
        assert_eq!(parse_hhmm("ab:cd"), None);
        assert_eq!(parse_hhmm("08:00:00"), None);
        assert_eq!(parse_hhmm("-1:30"), None);
    }

    #[test]
    fn format_is_unpadded_hours_padded_minutes() {
        assert_eq!(format_minutes(0), "0:00");
        assert_eq!(format_minutes(90), "1:30");
        assert_eq!(format_minutes(-90), "-1:30");
        assert_eq!(format_minutes(480), "8:00");
        assert_eq!(format_minutes(605), "10:05");
    }

    #[test]
    fn format_round_trips_through_parse_within_a_day() {
        for minutes in [0, 1, 59, 60, 61, 479, 480, 719, 1439] {
            let rendered = format_minutes(minutes);
            assert_eq!(parse_hhmm(&rendered), Some(minutes), "{rendered}");
        }
    }

    #[test]
    fn interval_subtracts_when_ordered() {
        assert_eq!(interval_minutes(Some("08:00"), Some("12:00")), 240);
        assert_eq!(interval_minutes(Some("08:00"), Some("08:00")), 0);
    }

    #[test]
    fn interval_is_zero_when_reversed_or_invalid() {
        assert_eq!(interval_minutes(Some("12:00"), Some("08:00")), 0);
        assert_eq!(interval_minutes(Some("12:00"), None), 0);
        assert_eq!(interval_minutes(None, Some("08:00")), 0);
        assert_eq!(interval_minutes(Some("bogus"), Some("08:00")), 0);
    }
}
