//! Base detection
//!
//! Infers which base a literal is written in from its textual shape. The
//! shapes overlap (`"0"` is a valid binary and decimal literal), so the
//! recognizers are tried in a fixed priority order: hexadecimal, octal,
//! binary, decimal.

use crate::base::Base;

/// Determine the base of `literal`
///
/// Returns `None` when the literal matches none of the supported shapes.
pub fn classify(literal: &str) -> Option<Base> {
    if is_hexadecimal(literal) {
        Some(Base::Hexadecimal)
    } else if is_octal(literal) {
        Some(Base::Octal)
    } else if is_binary(literal) {
        Some(Base::Binary)
    } else if is_decimal(literal) {
        Some(Base::Decimal)
    } else {
        None
    }
}

/// `0x` followed by at least one hex digit
///
/// The leading zero may also be written as the letter `O`/`o`.
pub fn is_hexadecimal(literal: &str) -> bool {
    match literal.as_bytes() {
        [b'0' | b'O' | b'o', b'x' | b'X', digits @ ..] if !digits.is_empty() => {
            digits.iter().all(u8::is_ascii_hexdigit)
        }
        _ => false,
    }
}

/// Octal digits terminated by the letter `q` (e.g. `17q`)
pub fn is_octal(literal: &str) -> bool {
    match literal.as_bytes() {
        [digits @ .., b'q'] if !digits.is_empty() => {
            digits.iter().all(|b| matches!(b, b'0'..=b'7'))
        }
        _ => false,
    }
}

/// Zeros and ones starting with a zero (e.g. `011001`)
pub fn is_binary(literal: &str) -> bool {
    literal.starts_with('0') && literal.bytes().all(|b| b == b'0' || b == b'1')
}

pub fn is_decimal(literal: &str) -> bool {
    !literal.is_empty() && literal.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // classify priority tests
    // ============================================================================

    #[test]
    fn test_classify_hex() {
        assert_eq!(classify("0x1A"), Some(Base::Hexadecimal));
        assert_eq!(classify("0xff00"), Some(Base::Hexadecimal));
        assert_eq!(classify("0X10"), Some(Base::Hexadecimal));
    }

    #[test]
    fn test_classify_hex_with_letter_o_prefix() {
        assert_eq!(classify("Ox1f"), Some(Base::Hexadecimal));
        assert_eq!(classify("ox1f"), Some(Base::Hexadecimal));
    }

    #[test]
    fn test_classify_leading_zero_is_binary_not_octal() {
        // No trailing 'q', so the octal rule does not apply
        assert_eq!(classify("011"), Some(Base::Binary));
    }

    #[test]
    fn test_classify_single_zero_is_binary() {
        assert_eq!(classify("0"), Some(Base::Binary));
    }

    #[test]
    fn test_classify_octal() {
        assert_eq!(classify("17q"), Some(Base::Octal));
        assert_eq!(classify("0q"), Some(Base::Octal));
        assert_eq!(classify("777q"), Some(Base::Octal));
    }

    #[test]
    fn test_classify_octal_rejects_digits_above_seven() {
        assert_eq!(classify("18q"), None);
    }

    #[test]
    fn test_classify_octal_checks_first_digit() {
        assert_eq!(classify("91q"), None);
        assert_eq!(classify("a1q"), None);
    }

    #[test]
    fn test_classify_decimal() {
        assert_eq!(classify("128"), Some(Base::Decimal));
        assert_eq!(classify("1"), Some(Base::Decimal));
        assert_eq!(classify("4294967295"), Some(Base::Decimal));
    }

    #[test]
    fn test_classify_binary_needs_leading_zero() {
        assert_eq!(classify("0101"), Some(Base::Binary));
        assert_eq!(classify("101"), Some(Base::Decimal));
    }

    #[test]
    fn test_classify_leading_zero_decimal() {
        assert_eq!(classify("0129"), Some(Base::Decimal));
    }

    #[test]
    fn test_classify_no_match() {
        assert_eq!(classify("ff"), None);
        assert_eq!(classify("12a"), None);
        assert_eq!(classify("-1"), None);
        assert_eq!(classify("1.5"), None);
    }

    #[test]
    fn test_classify_empty_literal() {
        assert_eq!(classify(""), None);
    }

    // ============================================================================
    // boundary tests
    // ============================================================================

    #[test]
    fn test_hex_prefix_without_digits_is_rejected() {
        assert!(!is_hexadecimal("0x"));
        assert_eq!(classify("0x"), None);
    }

    #[test]
    fn test_hex_rejects_invalid_digit() {
        assert!(!is_hexadecimal("0xfg"));
    }

    #[test]
    fn test_octal_suffix_alone_is_rejected() {
        assert!(!is_octal("q"));
        assert_eq!(classify("q"), None);
    }

    #[test]
    fn test_octal_rejects_embedded_q() {
        assert!(!is_octal("1q2q"));
    }

    #[test]
    fn test_octal_suffix_is_lowercase_only() {
        assert!(!is_octal("17Q"));
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(classify("０"), None);
        assert_eq!(classify("0xé"), None);
    }
}
