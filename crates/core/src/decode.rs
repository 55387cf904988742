//! Literal to value conversion
//!
//! Each decoder assumes its input already passed the matching recognizer in
//! [`crate::classify`]; characters that are not digits of the base contribute
//! nothing. Arithmetic wraps modulo 2^32, so oversized literals keep their low
//! 32 bits instead of failing.

/// Weighted sum of `digits`, least significant digit last
fn positional_sum(digits: &[u8], radix: u32, digit_value: fn(u8) -> u32) -> u32 {
    let mut weight: u32 = 1;
    let mut value: u32 = 0;

    for &digit in digits.iter().rev() {
        value = value.wrapping_add(weight.wrapping_mul(digit_value(digit)));
        weight = weight.wrapping_mul(radix);
    }

    value
}

fn binary_digit(b: u8) -> u32 {
    u32::from(b == b'1')
}

fn octal_digit(b: u8) -> u32 {
    match b {
        b'0'..=b'7' => u32::from(b - b'0'),
        _ => 0,
    }
}

fn hex_digit(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => u32::from(b - b'0'),
        b'A'..=b'F' => u32::from(b - b'A' + 10),
        b'a'..=b'f' => u32::from(b - b'a' + 10),
        _ => 0,
    }
}

/// Decode a binary literal such as `011001`
pub fn from_binary(literal: &str) -> u32 {
    positional_sum(literal.as_bytes(), 2, binary_digit)
}

/// Decode an octal literal such as `17q`, ignoring the trailing `q`
pub fn from_octal(literal: &str) -> u32 {
    let digits = literal.strip_suffix('q').unwrap_or(literal);
    positional_sum(digits.as_bytes(), 8, octal_digit)
}

/// Decode a decimal literal such as `128`
pub fn from_decimal(literal: &str) -> u32 {
    literal
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u32, |value, b| {
            value.wrapping_mul(10).wrapping_add(u32::from(b - b'0'))
        })
}

/// Decode a hexadecimal literal such as `0xff00`, skipping the two-character prefix
pub fn from_hexadecimal(literal: &str) -> u32 {
    let digits = literal.as_bytes().get(2..).unwrap_or_default();
    positional_sum(digits, 16, hex_digit)
}
