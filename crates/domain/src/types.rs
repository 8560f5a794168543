// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A 24-hour time of day encoded as `HHMM` (e.g. `1430` for 2:30pm).
///
/// Values compare numerically. No hour/minute range check is applied, so a
/// persisted `2500` is kept and compared as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time of day from its `HHMM` integer encoding.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the `HHMM` integer encoding.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if trimmed.is_empty() || trimmed.len() > 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidTimeOfDay(s.to_string()));
        }
        trimmed
            .parse::<u16>()
            .map(Self)
            .map_err(|_| DomainError::InvalidTimeOfDay(s.to_string()))
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A calendar date encoded as `YYYYMMDD`.
///
/// Ordering is numeric, which for the fixed 8 digit encoding is the same as
/// lexicographic ordering of the persisted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate(u32);

impl CalendarDate {
    /// Creates a date from its components.
    #[must_use]
    pub const fn from_ymd(year: u32, month: u32, day: u32) -> Self {
        Self(year * 10_000 + month * 100 + day)
    }

    /// Returns the `YYYYMMDD` integer encoding.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the year component.
    #[must_use]
    pub const fn year(self) -> u32 {
        self.0 / 10_000
    }

    /// Returns the month component.
    #[must_use]
    pub const fn month(self) -> u32 {
        (self.0 / 100) % 100
    }

    /// Returns the day-of-month component.
    #[must_use]
    pub const fn day(self) -> u32 {
        self.0 % 100
    }
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if trimmed.len() != 8 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidCalendarDate(s.to_string()));
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| DomainError::InvalidCalendarDate(s.to_string()))
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08}", self.0)
    }
}

/// The set of weekdays on which activation is allowed.
///
/// Days use the persisted digit encoding: `1` = Sunday through `7` = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayMask(u8);

impl DayMask {
    /// Creates a mask from a list of day digits.
    ///
    /// # Errors
    ///
    /// Returns an error if any digit is outside 1-7.
    pub fn from_digits(digits: &[u8]) -> Result<Self, DomainError> {
        let mut bits: u8 = 0;
        for digit in digits {
            if !(1..=7).contains(digit) {
                return Err(DomainError::InvalidDayDigit(*digit));
            }
            bits |= 1u8 << *digit;
        }
        Ok(Self(bits))
    }

    /// Returns whether the given day digit is allowed.
    #[must_use]
    pub const fn contains(self, day_digit: u8) -> bool {
        day_digit >= 1 && day_digit <= 7 && self.0 & (1 << day_digit) != 0
    }

    /// Returns the allowed day digits in ascending order.
    #[must_use]
    pub fn digits(self) -> Vec<u8> {
        (1..=7).filter(|d| self.contains(*d)).collect()
    }
}

impl FromStr for DayMask {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDayMask(s.to_string()));
        }
        let digits: Vec<u8> = trimmed
            .bytes()
            .map(|b| match b {
                b'1'..=b'7' => Ok(b - b'0'),
                _ => Err(DomainError::InvalidDayMask(s.to_string())),
            })
            .collect::<Result<_, _>>()?;
        Self::from_digits(&digits)
    }
}

impl std::fmt::Display for DayMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.digits() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// The kind of entity a constraint is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A user's own constraint, checked when a session is created.
    User,
    /// An RBAC role.
    Role,
    /// An ARBAC administrative role.
    AdminRole,
    /// A user-to-role assignment.
    UserRole,
    /// A user-to-admin-role assignment.
    UserAdminRole,
}

impl EntityKind {
    /// Converts this kind to its stable label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Role => "role",
            Self::AdminRole => "adminrole",
            Self::UserRole => "userrole",
            Self::UserAdminRole => "useradminrole",
        }
    }

    /// Returns whether this kind is activated into a session as a role.
    #[must_use]
    pub const fn is_role(&self) -> bool {
        !matches!(self, Self::User)
    }

    /// Returns whether this kind is an administrative (ARBAC) role.
    #[must_use]
    pub const fn is_administrative(&self) -> bool {
        matches!(self, Self::AdminRole | Self::UserAdminRole)
    }

    /// Returns whether separation-of-duty checks apply to this kind.
    ///
    /// Only RBAC roles take part; administrative roles do not.
    #[must_use]
    pub const fn participates_in_sod(&self) -> bool {
        matches!(self, Self::Role | Self::UserRole)
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "role" => Ok(Self::Role),
            "adminrole" => Ok(Self::AdminRole),
            "userrole" => Ok(Self::UserRole),
            "useradminrole" => Ok(Self::UserAdminRole),
            _ => Err(DomainError::InvalidEntityKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A read-only view of the session a constraint is validated against.
///
/// The session manager owns and mutates the underlying state; validators only
/// read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext<'a> {
    user_id: &'a str,
    last_access_millis: i64,
    active_roles: &'a [String],
}

impl<'a> SessionContext<'a> {
    /// Creates a context for a session that has never been accessed.
    #[must_use]
    pub const fn new(user_id: &'a str) -> Self {
        Self {
            user_id,
            last_access_millis: 0,
            active_roles: &[],
        }
    }

    /// Sets the last access time, in epoch milliseconds. `0` means never.
    #[must_use]
    pub const fn with_last_access(mut self, last_access_millis: i64) -> Self {
        self.last_access_millis = last_access_millis;
        self
    }

    /// Sets the roles already active in the session.
    #[must_use]
    pub const fn with_active_roles(mut self, active_roles: &'a [String]) -> Self {
        self.active_roles = active_roles;
        self
    }

    /// Returns the session's user id.
    #[must_use]
    pub const fn user_id(&self) -> &'a str {
        self.user_id
    }

    /// Returns the last access time in epoch milliseconds (`0` = never).
    #[must_use]
    pub const fn last_access_millis(&self) -> i64 {
        self.last_access_millis
    }

    /// Returns the roles already active in the session.
    #[must_use]
    pub const fn active_roles(&self) -> &'a [String] {
        self.active_roles
    }

    /// Returns whether a role is active, ignoring ASCII case.
    #[must_use]
    pub fn has_active_role(&self, role: &str) -> bool {
        self.active_roles
            .iter()
            .any(|active| active.eq_ignore_ascii_case(role))
    }
}
