//! Wall-clock time intervals.
//!
//! Times are fixed-width, zero-padded `HH:MM` strings. Because of the
//! fixed width, lexicographic comparison is equivalent to numeric
//! comparison, so the overlap predicate works directly on the strings.
//! There is no timezone concept; all times are local to the institution.

/// Parses a `HH:MM` value, hour 0..=23 and minute 0..=59.
///
/// Both positions must be ASCII digits; anything that would break the
/// fixed zero-padded width (signs, spaces) is rejected so that string
/// ordering stays consistent with clock ordering.
pub fn parse_hhmm(value: &str) -> Option<(u8, u8)> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || !bytes[3].is_ascii_digit()
        || !bytes[4].is_ascii_digit()
    {
        return None;
    }
    let hour: u8 = value[0..2].parse().ok()?;
    let minute: u8 = value[3..5].parse().ok()?;
    (hour <= 23 && minute <= 59).then_some((hour, minute))
}

/// Half-open overlap test: `[a_start, a_end)` intersects `[b_start, b_end)`
/// exactly when `a_start < b_end && a_end > b_start`. Touching endpoints
/// do not overlap. Inverted or zero-length ranges never overlap anything.
pub fn overlaps(a_start: &str, a_end: &str, b_start: &str, b_end: &str) -> bool {
    a_start < b_end && a_end > b_start
}
