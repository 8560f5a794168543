// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The validator strategy and the registry of built-in rules.

use crate::clock_time::ClockTimeValidator;
use crate::date::DateValidator;
use crate::day::DayValidator;
use crate::error::CoreError;
use crate::lock_date::LockDateValidator;
use crate::timeout::TimeoutValidator;
use rolegate_domain::{Constraint, Denial, SessionContext, TimeSnapshot};
use std::str::FromStr;

/// One temporal admissibility rule.
///
/// Implementations hold no state between calls: the outcome is a pure
/// function of the session context, the constraint and the snapshot.
pub trait Validator: Send + Sync {
    /// Returns the stable name of this rule, used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Decides whether the constrained entity may be activated at `now`.
    ///
    /// # Errors
    ///
    /// Returns the rule's [`Denial`] if activation must be refused.
    fn validate(
        &self,
        session: &SessionContext<'_>,
        constraint: &Constraint,
        now: &TimeSnapshot,
    ) -> Result<(), Denial>;
}

/// The built-in temporal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    /// Date range check.
    Date,
    /// Lockout window check.
    LockDate,
    /// Day-of-week check.
    Day,
    /// Time-of-day window check.
    ClockTime,
    /// Session idle timeout check.
    Timeout,
}

impl ValidatorKind {
    /// The default evaluation order.
    pub const DEFAULT_ORDER: [Self; 5] = [
        Self::Date,
        Self::LockDate,
        Self::Day,
        Self::ClockTime,
        Self::Timeout,
    ];

    /// Returns the configuration name of this rule.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::LockDate => "lockdate",
            Self::Day => "day",
            Self::ClockTime => "clocktime",
            Self::Timeout => "timeout",
        }
    }

    /// Instantiates the rule.
    #[must_use]
    pub fn build(self) -> Box<dyn Validator> {
        match self {
            Self::Date => Box::new(DateValidator),
            Self::LockDate => Box::new(LockDateValidator),
            Self::Day => Box::new(DayValidator),
            Self::ClockTime => Box::new(ClockTimeValidator),
            Self::Timeout => Box::new(TimeoutValidator),
        }
    }
}

impl FromStr for ValidatorKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "lockdate" => Ok(Self::LockDate),
            "day" => Ok(Self::Day),
            "clocktime" => Ok(Self::ClockTime),
            "timeout" => Ok(Self::Timeout),
            _ => Err(CoreError::InvalidConfig {
                reason: format!("unknown validator '{s}'"),
            }),
        }
    }
}

impl std::fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
