use serde::Serialize;
use std::fmt;

use crate::base::Base;
use crate::classify::classify;

/// Error type for conversion operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("can't determine type of {0}!")]
    UnknownBase(String),
}

/// Outcome of converting one literal into a target base
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub literal: String,
    pub from: Base,
    pub value: u32,
    pub to: Base,
    pub rendered: String,
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) = {} ({})",
            self.literal, self.from, self.rendered, self.to
        )
    }
}

/// Convert `literal` into `target`
///
/// Detects the literal's base, decodes it with that base's decoder and renders
/// the value with the target's encoder.
pub fn convert(literal: &str, target: Base) -> Result<ConversionReport, ConvertError> {
    let from = classify(literal).ok_or_else(|| ConvertError::UnknownBase(literal.to_string()))?;

    let value = (from.codec().decode)(literal);
    let rendered = (target.codec().encode)(value);

    Ok(ConversionReport {
        literal: literal.to_string(),
        from,
        value,
        to: target,
        rendered,
    })
}
