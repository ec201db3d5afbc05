//! # Numeric Coercion
//!
//! Converts raw field text to a number using the same rules a browser applies
//! when a form value is passed through `Number(...)`:
//!
//! - surrounding whitespace is ignored, and blank text becomes `0`
//! - `Infinity`, `+Infinity` and `-Infinity` are accepted (case-sensitive)
//! - unsigned `0x`, `0o` and `0b` integers are accepted
//! - decimal literals may omit either side of the point (`.5`, `5.`)
//! - everything else becomes NaN
//!
//! Rust's own `f64::from_str` is more permissive (`inf`, `NaN`, `infinity`),
//! so the grammar is checked here before delegating the digits to it.
//!
//! ## Example
//!
//! ```rust
//! use divide_core::numeric::{coerce, is_number};
//!
//! assert_eq!(coerce("  42 "), 42.0);
//! assert_eq!(coerce(""), 0.0);
//! assert_eq!(coerce("0x1F"), 31.0);
//! assert!(coerce("12abc").is_nan());
//! assert!(!is_number("nan"));
//! ```

/// Coerce field text to a number. Malformed text yields NaN.
pub fn coerce(value: &str) -> f64 {
    let trimmed = value.trim_matches(is_form_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(radix_value) = parse_radix_integer(trimmed) {
        return radix_value;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Whether the text coerces to a real number (anything but NaN).
///
/// Infinities count as numbers.
pub fn is_number(value: &str) -> bool {
    !coerce(value).is_nan()
}

/// Whitespace and line terminators stripped around numeric text
fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `0x` / `0o` / `0b` integers. No sign, at least one digit.
fn parse_radix_integer(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0.0);
    }

    // Integer to float conversion rounds once, to nearest, ties to even
    match u128::from_str_radix(significant, radix) {
        Ok(exact) => Some(exact as f64),
        Err(_) => Some(round_long_radix(significant, radix)),
    }
}

/// Correctly rounded value of a power-of-two radix integer wider than 128
/// bits, so always wider than the 53-bit mantissa. `digits` must be valid
/// and start with a non-zero digit.
fn round_long_radix(digits: &str, radix: u32) -> f64 {
    const MANTISSA_BITS: usize = 53;

    let bits_per_digit = radix.trailing_zeros();
    let bits: Vec<bool> = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .flat_map(|digit| (0..bits_per_digit).rev().map(move |i| (digit >> i) & 1 == 1))
        .skip_while(|bit| !bit)
        .collect();

    let mut mantissa = bits[..MANTISSA_BITS]
        .iter()
        .fold(0_u64, |acc, &bit| (acc << 1) | u64::from(bit));
    let round_bit = bits[MANTISSA_BITS];
    let sticky = bits[MANTISSA_BITS + 1..].iter().any(|&bit| bit);
    if round_bit && (sticky || mantissa & 1 == 1) {
        mantissa += 1;
    }

    let exponent = bits.len() - MANTISSA_BITS;
    if exponent > 1024 {
        return f64::INFINITY;
    }
    // Scaling by a power of two is exact until it overflows to infinity
    mantissa as f64 * 2.0_f64.powi(exponent as i32)
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
