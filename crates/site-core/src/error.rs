use thiserror::Error;

/// Failure to interpret a configuration string (usually a `data-*` attribute).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown {kind} `{value}`")]
    Unknown { kind: &'static str, value: String },
    #[error("invalid number `{value}` for {field}")]
    Number { field: &'static str, value: String },
    #[error("invalid colour `{0}`")]
    Colour(String),
}

impl ParseError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::Unknown {
            kind,
            value: value.to_string(),
        }
    }
}

/// Parse a finite, non-negative number from an attribute value.
pub fn parse_non_negative(field: &'static str, value: &str) -> Result<f32, ParseError> {
    match value.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ParseError::Number {
            field,
            value: value.to_string(),
        }),
    }
}

/// Parse a boolean attribute; an empty value counts as `true` like HTML flags.
pub fn parse_flag(field: &'static str, value: &str) -> Result<bool, ParseError> {
    match value.trim() {
        "" | "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ParseError::Number {
            field,
            value: value.to_string(),
        }),
    }
}
