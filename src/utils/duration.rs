//! Duration token parsing
//!
//! Admins pass restriction durations as compact `<value><unit>` tokens,
//! e.g. `/mute 10m`, `/ban 2h`.

use thiserror::Error;

/// Errors produced by [`parse_duration`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationParseError {
    /// The magnitude is missing, not a number, or not positive.
    #[error("duration value must be a positive integer")]
    BadMagnitude,

    /// The trailing unit is not one of `m`, `h`, `d`.
    #[error("duration unit must be m, h or d")]
    BadUnit,
}

/// Parse a duration token into seconds.
///
/// The last character is the unit (minutes, hours or days), everything
/// before it is the magnitude. Zero is rejected: a zero-length restriction
/// has no effect.
pub fn parse_duration(token: &str) -> Result<u64, DurationParseError> {
    let unit = token
        .chars()
        .last()
        .ok_or(DurationParseError::BadMagnitude)?;
    let magnitude = &token[..token.len() - unit.len_utf8()];
    let value: u64 = magnitude
        .parse()
        .map_err(|_| DurationParseError::BadMagnitude)?;
    if value == 0 {
        return Err(DurationParseError::BadMagnitude);
    }

    match unit {
        'm' => Ok(value * 60),
        'h' => Ok(value * 3600),
        'd' => Ok(value * 86400),
        _ => Err(DurationParseError::BadUnit),
    }
}
