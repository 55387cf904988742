//! Value to literal rendering
//!
//! Binary, octal and hexadecimal output always uses the full 32-bit width so
//! columns line up across conversions. Decimal output is minimal.

/// 32 bits, most significant first, grouped into four bytes
///
/// Format: `00000000 00000000 00000000 00000000`
pub fn to_binary(value: u32) -> String {
    value
        .to_be_bytes()
        .iter()
        .map(|byte| format!("{byte:08b}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 11 octal digits; the leading digit only carries the top two bits
pub fn to_octal(value: u32) -> String {
    format!("{value:011o}")
}

pub fn to_decimal(value: u32) -> String {
    value.to_string()
}

/// 8 uppercase hex digits, without a `0x` prefix
pub fn to_hexadecimal(value: u32) -> String {
    format!("{value:08X}")
}
