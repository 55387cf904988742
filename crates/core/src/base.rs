use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{decode, encode};

/// A number base supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    #[serde(rename = "BIN")]
    Binary,
    #[serde(rename = "OCT")]
    Octal,
    #[serde(rename = "DEC")]
    Decimal,
    #[serde(rename = "HEX")]
    Hexadecimal,
}

/// Decoder/encoder pair for a single base
#[derive(Clone, Copy)]
pub struct Codec {
    /// Turns a literal that already passed classification into a value
    pub decode: fn(&str) -> u32,
    /// Renders a value in the base's fixed layout
    pub encode: fn(u32) -> String,
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec").finish_non_exhaustive()
    }
}

impl Base {
    pub const ALL: [Base; 4] = [
        Base::Binary,
        Base::Octal,
        Base::Decimal,
        Base::Hexadecimal,
    ];

    /// Short tag used in conversion reports ("BIN", "OCT", "DEC", "HEX")
    pub fn name(self) -> &'static str {
        match self {
            Base::Binary => "BIN",
            Base::Octal => "OCT",
            Base::Decimal => "DEC",
            Base::Hexadecimal => "HEX",
        }
    }

    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    /// Look up the decoder/encoder pair for this base
    pub fn codec(self) -> Codec {
        match self {
            Base::Binary => Codec {
                decode: decode::from_binary,
                encode: encode::to_binary,
            },
            Base::Octal => Codec {
                decode: decode::from_octal,
                encode: encode::to_octal,
            },
            Base::Decimal => Codec {
                decode: decode::from_decimal,
                encode: encode::to_decimal,
            },
            Base::Hexadecimal => Codec {
                decode: decode::from_hexadecimal,
                encode: encode::to_hexadecimal,
            },
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
