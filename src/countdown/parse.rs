//! Sanitizing the initial duration read from the host

/// Interpret a raw attribute value as whole seconds remaining.
///
/// Leading whitespace and an optional sign are accepted, then the leading run
/// of decimal digits is taken and anything after it is ignored. Missing,
/// digit-less and negative input all yield `0`; oversized values saturate.
pub fn parse_remaining(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };

    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen_digit = false;
    let mut value: u64 = 0;
    for digit in digits {
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(digit - b'0'));
    }

    if !seen_digit || negative {
        return 0;
    }
    value
}
