// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Temporal constraints attached to users, roles and assignments.
//!
//! Constraints are persisted as string attributes with two reserved
//! sentinels:
//! - `"none"` disables a time or date bound
//! - `"all"` allows every weekday
//!
//! Sentinels are matched case-insensitively. [`Constraint::parse`] converts the
//! raw attributes once into typed values; malformed data is reported as
//! [`DomainError::MalformedConstraint`] and is never treated as a denial.

use crate::error::DomainError;
use crate::types::{CalendarDate, DayMask, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sentinel disabling a time or date bound.
pub const NONE_SENTINEL: &str = "none";

/// Sentinel allowing every weekday.
pub const ALL_SENTINEL: &str = "all";

/// Constraint attributes as persisted alongside an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawConstraint {
    /// Name of the constrained entity (user id or role name).
    pub name: String,
    /// `HHMM` start of the allowed time window, or `"none"`.
    pub begin_time: Option<String>,
    /// `HHMM` end of the allowed time window, or `"none"`.
    pub end_time: Option<String>,
    /// `YYYYMMDD` first allowed date, or `"none"`.
    pub begin_date: Option<String>,
    /// `YYYYMMDD` last allowed date, or `"none"`.
    pub end_date: Option<String>,
    /// Allowed weekday digits (`1` = Sunday), or `"all"`.
    pub day_mask: Option<String>,
    /// `YYYYMMDD` first day of the lockout window, or `"none"`.
    pub begin_lock_date: Option<String>,
    /// `YYYYMMDD` last day of the lockout window, or `"none"`.
    pub end_lock_date: Option<String>,
    /// Idle timeout in minutes; `0` never times out.
    pub timeout_minutes: u32,
}

/// An inclusive time-of-day window.
///
/// There is no wrap-around past midnight: a window whose end is before its
/// begin matches almost nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    begin: TimeOfDay,
    end: TimeOfDay,
}

impl TimeWindow {
    /// Creates a window from its bounds.
    #[must_use]
    pub const fn new(begin: TimeOfDay, end: TimeOfDay) -> Self {
        Self { begin, end }
    }

    /// Returns the begin bound.
    #[must_use]
    pub const fn begin(&self) -> TimeOfDay {
        self.begin
    }

    /// Returns the end bound.
    #[must_use]
    pub const fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Returns whether this is the explicit `0000`-`0000` "always allowed" window.
    #[must_use]
    pub const fn is_always(&self) -> bool {
        self.begin.value() == 0 && self.end.value() == 0
    }

    /// Returns whether `clock` lies inside the window, both ends inclusive.
    #[must_use]
    pub fn contains(&self, clock: TimeOfDay) -> bool {
        self.begin <= clock && clock <= self.end
    }
}

/// An inclusive range of calendar dates during which activation is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockWindow {
    begin: CalendarDate,
    end: CalendarDate,
}

impl LockWindow {
    /// Creates a lockout window from its bounds.
    #[must_use]
    pub const fn new(begin: CalendarDate, end: CalendarDate) -> Self {
        Self { begin, end }
    }

    /// Returns the first locked date.
    #[must_use]
    pub const fn begin(&self) -> CalendarDate {
        self.begin
    }

    /// Returns the last locked date.
    #[must_use]
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns whether `date` lies inside the window, both ends inclusive.
    #[must_use]
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.begin <= date && date <= self.end
    }
}

/// The typed temporal constraint of one entity.
///
/// A `None` field means the corresponding check is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    name: String,
    time_window: Option<TimeWindow>,
    begin_date: Option<CalendarDate>,
    end_date: Option<CalendarDate>,
    day_mask: Option<DayMask>,
    lock_window: Option<LockWindow>,
    timeout_minutes: u32,
}

impl Constraint {
    /// Creates a constraint with every check disabled.
    #[must_use]
    pub fn unrestricted(name: &str) -> Self {
        Self {
            name: name.to_string(),
            time_window: None,
            begin_date: None,
            end_date: None,
            day_mask: None,
            lock_window: None,
            timeout_minutes: 0,
        }
    }

    /// Parses persisted attributes into a typed constraint.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedConstraint`] if any enabled attribute
    /// cannot be read, or if `beginTime` is set without `endTime`.
    pub fn parse(raw: &RawConstraint) -> Result<Self, DomainError> {
        let name: &str = raw.name.as_str();

        // endTime is only consulted when beginTime is enabled
        let time_window: Option<TimeWindow> =
            match enabled(raw.begin_time.as_deref(), NONE_SENTINEL) {
                None => None,
                Some(begin) => {
                    let begin: TimeOfDay = parse_attribute(name, "beginTime", begin)?;
                    let end: &str = enabled(raw.end_time.as_deref(), NONE_SENTINEL).ok_or_else(
                        || DomainError::MalformedConstraint {
                            constraint: name.to_string(),
                            attribute: "endTime",
                            value: raw.end_time.clone().unwrap_or_default(),
                            reason: String::from("required when beginTime is set"),
                        },
                    )?;
                    let end: TimeOfDay = parse_attribute(name, "endTime", end)?;
                    Some(TimeWindow::new(begin, end))
                }
            };

        let begin_date: Option<CalendarDate> =
            parse_optional(name, "beginDate", raw.begin_date.as_deref(), NONE_SENTINEL)?;
        let end_date: Option<CalendarDate> =
            parse_optional(name, "endDate", raw.end_date.as_deref(), NONE_SENTINEL)?;

        let day_mask: Option<DayMask> =
            parse_optional(name, "dayMask", raw.day_mask.as_deref(), ALL_SENTINEL)?;

        // Either lock bound disabled turns the whole lockout check off
        let begin_lock: Option<CalendarDate> = parse_optional(
            name,
            "beginLockDate",
            raw.begin_lock_date.as_deref(),
            NONE_SENTINEL,
        )?;
        let end_lock: Option<CalendarDate> = parse_optional(
            name,
            "endLockDate",
            raw.end_lock_date.as_deref(),
            NONE_SENTINEL,
        )?;
        let lock_window: Option<LockWindow> = begin_lock
            .zip(end_lock)
            .map(|(begin, end)| LockWindow::new(begin, end));

        Ok(Self {
            name: name.to_string(),
            time_window,
            begin_date,
            end_date,
            day_mask,
            lock_window,
            timeout_minutes: raw.timeout_minutes,
        })
    }

    /// Sets the time-of-day window.
    #[must_use]
    pub const fn with_time_window(mut self, window: TimeWindow) -> Self {
        self.time_window = Some(window);
        self
    }

    /// Sets the date range bounds; either may be `None`.
    #[must_use]
    pub const fn with_date_range(
        mut self,
        begin: Option<CalendarDate>,
        end: Option<CalendarDate>,
    ) -> Self {
        self.begin_date = begin;
        self.end_date = end;
        self
    }

    /// Sets the allowed weekdays.
    #[must_use]
    pub const fn with_day_mask(mut self, mask: DayMask) -> Self {
        self.day_mask = Some(mask);
        self
    }

    /// Sets the lockout window.
    #[must_use]
    pub const fn with_lock_window(mut self, window: LockWindow) -> Self {
        self.lock_window = Some(window);
        self
    }

    /// Sets the idle timeout in minutes.
    #[must_use]
    pub const fn with_timeout(mut self, minutes: u32) -> Self {
        self.timeout_minutes = minutes;
        self
    }

    /// Returns the constrained entity's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the time-of-day window, if enabled.
    #[must_use]
    pub const fn time_window(&self) -> Option<TimeWindow> {
        self.time_window
    }

    /// Returns the first allowed date, if bounded.
    #[must_use]
    pub const fn begin_date(&self) -> Option<CalendarDate> {
        self.begin_date
    }

    /// Returns the last allowed date, if bounded.
    #[must_use]
    pub const fn end_date(&self) -> Option<CalendarDate> {
        self.end_date
    }

    /// Returns the allowed weekdays, if restricted.
    #[must_use]
    pub const fn day_mask(&self) -> Option<DayMask> {
        self.day_mask
    }

    /// Returns the lockout window, if enabled.
    #[must_use]
    pub const fn lock_window(&self) -> Option<LockWindow> {
        self.lock_window
    }

    /// Returns the idle timeout in minutes (`0` = never).
    #[must_use]
    pub const fn timeout_minutes(&self) -> u32 {
        self.timeout_minutes
    }
}

impl TryFrom<&RawConstraint> for Constraint {
    type Error = DomainError;

    fn try_from(raw: &RawConstraint) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

/// Returns the trimmed value unless it is absent, empty or the sentinel.
fn enabled<'a>(value: Option<&'a str>, sentinel: &str) -> Option<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(sentinel))
}

fn parse_attribute<T>(constraint: &str, attribute: &'static str, value: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    value
        .parse::<T>()
        .map_err(|err| DomainError::MalformedConstraint {
            constraint: constraint.to_string(),
            attribute,
            value: value.to_string(),
            reason: err.to_string(),
        })
}

fn parse_optional<T>(
    constraint: &str,
    attribute: &'static str,
    value: Option<&str>,
    sentinel: &str,
) -> Result<Option<T>, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    enabled(value, sentinel)
        .map(|v| parse_attribute(constraint, attribute, v))
        .transpose()
}
