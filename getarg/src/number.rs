/// Parse a decimal integer the way `strtoll` does with base 10.
///
/// Leading ASCII whitespace is skipped, one optional sign is accepted, and
/// the longest following run of digits is converted. Trailing garbage is
/// ignored (`"12abc"` is 12). No digits at all gives 0. Out-of-range values
/// saturate at the `i64` bounds.
pub fn parse_int(s: &str) -> i64 {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut n: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        // Accumulate toward the sign so i64::MIN is reachable.
        n = match n.checked_mul(10).and_then(|n| {
            if negative {
                n.checked_sub(d)
            } else {
                n.checked_add(d)
            }
        }) {
            Some(n) => n,
            None => return if negative { i64::MIN } else { i64::MAX },
        };
    }
    n
}
