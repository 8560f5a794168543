// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capturing "now" for a validation pass.
//!
//! A [`TimeSnapshot`] holds the encodings the temporal rules compare against:
//! - `clock`: `HHMM` time of day
//! - `day`: weekday digit, `1` = Sunday through `7` = Saturday
//! - `date`: `YYYYMMDD` calendar date
//! - `epoch_millis`: the same instant in Unix milliseconds
//!
//! ## Invariants
//!
//! - All fields derive from one instant
//! - A snapshot is taken once per validation pass and shared by every rule

use crate::error::DomainError;
use crate::types::{CalendarDate, TimeOfDay};
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// The current instant in the encodings used by the temporal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSnapshot {
    clock: TimeOfDay,
    day: u8,
    date: CalendarDate,
    epoch_millis: i64,
}

impl TimeSnapshot {
    /// Captures every field from a single instant, in that instant's zone.
    #[must_use]
    pub fn at<Z: TimeZone>(instant: &DateTime<Z>) -> Self {
        // Safe casts: chrono guarantees hour < 24, minute < 60, weekday 1-7,
        // month 1-12 and day 1-31; years before 0 are not representable in
        // the persisted encoding anyway.
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let (clock, day, date) = (
            TimeOfDay::new((instant.hour() * 100 + instant.minute()) as u16),
            instant.weekday().number_from_sunday() as u8,
            CalendarDate::from_ymd(instant.year().max(0) as u32, instant.month(), instant.day()),
        );

        Self {
            clock,
            day,
            date,
            epoch_millis: instant.timestamp_millis(),
        }
    }

    /// Assembles a snapshot from already decomposed fields.
    ///
    /// The caller is responsible for all fields describing one instant.
    ///
    /// # Errors
    ///
    /// Returns an error if `day` is outside 1-7.
    pub const fn from_parts(
        clock: TimeOfDay,
        day: u8,
        date: CalendarDate,
        epoch_millis: i64,
    ) -> Result<Self, DomainError> {
        if day < 1 || day > 7 {
            return Err(DomainError::InvalidDayDigit(day));
        }
        Ok(Self {
            clock,
            day,
            date,
            epoch_millis,
        })
    }

    /// Returns the `HHMM` time of day.
    #[must_use]
    pub const fn clock(&self) -> TimeOfDay {
        self.clock
    }

    /// Returns the weekday digit (`1` = Sunday).
    #[must_use]
    pub const fn day_digit(&self) -> u8 {
        self.day
    }

    /// Returns the `YYYYMMDD` date.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the instant in Unix milliseconds.
    #[must_use]
    pub const fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }
}

impl std::fmt::Display for TimeSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} day={}", self.date, self.clock, self.day)
    }
}

/// A source of time snapshots.
pub trait Clock: Send + Sync {
    /// Captures the current instant.
    fn now(&self) -> TimeSnapshot;
}

/// Reads the system clock in a declared time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    /// Creates a clock for the given zone.
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Creates a clock from an IANA zone name (e.g. `America/New_York`).
    ///
    /// # Errors
    ///
    /// Returns an error if the zone name is unknown.
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        let timezone: Tz = name
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))?;
        Ok(Self::new(timezone))
    }

    /// Returns the declared zone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> TimeSnapshot {
        TimeSnapshot::at(&Utc::now().with_timezone(&self.timezone))
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    snapshot: TimeSnapshot,
}

impl FixedClock {
    /// Freezes the clock at the given instant.
    #[must_use]
    pub fn at<Z: TimeZone>(instant: &DateTime<Z>) -> Self {
        Self {
            snapshot: TimeSnapshot::at(instant),
        }
    }

    /// Freezes the clock at an existing snapshot.
    #[must_use]
    pub const fn from_snapshot(snapshot: TimeSnapshot) -> Self {
        Self { snapshot }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> TimeSnapshot {
        self.snapshot
    }
}
