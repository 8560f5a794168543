// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while building domain values.
///
/// These are system errors about malformed data. They are never used to
/// express a temporal rejection; see [`crate::Denial`] for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A time of day is not a 1-4 digit `HHMM` value.
    InvalidTimeOfDay(String),
    /// A calendar date is not an 8 digit `YYYYMMDD` value.
    InvalidCalendarDate(String),
    /// A day mask contains something other than the digits 1-7.
    InvalidDayMask(String),
    /// A day-of-week digit is outside 1-7.
    InvalidDayDigit(u8),
    /// An entity kind label is not recognized.
    InvalidEntityKind(String),
    /// A time zone name is not a known IANA zone.
    InvalidTimezone(String),
    /// A persisted constraint attribute could not be interpreted.
    MalformedConstraint {
        /// The name of the constrained entity.
        constraint: String,
        /// The attribute that failed to parse (e.g. `beginTime`).
        attribute: &'static str,
        /// The raw attribute value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeOfDay(value) => {
                write!(f, "Invalid time of day '{value}': expected HHMM digits")
            }
            Self::InvalidCalendarDate(value) => {
                write!(f, "Invalid calendar date '{value}': expected YYYYMMDD")
            }
            Self::InvalidDayMask(value) => {
                write!(f, "Invalid day mask '{value}': expected digits 1-7")
            }
            Self::InvalidDayDigit(digit) => {
                write!(f, "Invalid day-of-week digit {digit}: expected 1-7")
            }
            Self::InvalidEntityKind(value) => write!(f, "Invalid entity kind: {value}"),
            Self::InvalidTimezone(value) => write!(f, "Invalid timezone: {value}"),
            Self::MalformedConstraint {
                constraint,
                attribute,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Malformed constraint '{constraint}': attribute {attribute}='{value}': {reason}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
