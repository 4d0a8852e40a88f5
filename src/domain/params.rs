//! Request parameter coercion.
//!
//! Form and query values arrive as untyped strings. These helpers turn them
//! into typed values with a fixed, documented policy instead of relying on
//! implicit coercion at each call site.

/// Returns the value only when it is present and non-empty.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parses the leading integer of `input`.
///
/// Leading whitespace and a single `+`/`-` sign are accepted, followed by
/// decimal digits (or hex digits after a `0x`/`0X` prefix). Parsing stops at
/// the first character that is not a digit, so `"30 minutes"` yields `30`
/// and `"3.7"` yields `3`. Returns `None` when no digit is found.
/// Values beyond the `i64` range saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        seen_digit = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(d));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
