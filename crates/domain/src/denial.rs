// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Temporal denial taxonomy.
//!
//! Every temporal rejection is attributable to exactly one rule. The numeric
//! codes are part of the persisted/audited contract and never change.

use serde::{Deserialize, Serialize};

/// The reason a temporal rule refused an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Denial {
    /// The current time of day is outside `[beginTime, endTime]`.
    ClockTime,
    /// The current date is outside `[beginDate, endDate]`.
    Date,
    /// Today's weekday is not in the day mask.
    Day,
    /// The current date is inside the lockout window.
    LockDate,
    /// The session has been idle longer than the timeout.
    Timeout,
}

impl Denial {
    /// Returns the stable numeric code for this denial.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::ClockTime => 2050,
            Self::Date => 2051,
            Self::Day => 2052,
            Self::LockDate => 2053,
            Self::Timeout => 2054,
        }
    }

    /// Returns a short machine-friendly label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClockTime => "clock_time",
            Self::Date => "date",
            Self::Day => "day",
            Self::LockDate => "lock_date",
            Self::Timeout => "timeout",
        }
    }

    /// Returns the user-visible reason for this denial.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::ClockTime => "time of day outside permitted window",
            Self::Date => "date outside permitted range",
            Self::Day => "day of week not permitted",
            Self::LockDate => "inside lockout window",
            Self::Timeout => "session idle timeout exceeded",
        }
    }
}

impl std::fmt::Display for Denial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.reason(), self.code())
    }
}
