// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Validator;
use rolegate_domain::{
    CalendarDate, Constraint, Denial, RawConstraint, SessionContext, TimeOfDay, TimeSnapshot,
};

/// 2011-02-01 09:30 UTC, a Tuesday.
pub const BASE_MILLIS: i64 = 1_296_552_600_000;

pub fn create_test_snapshot(clock: &str, day: u8, date: &str) -> TimeSnapshot {
    TimeSnapshot::from_parts(
        clock.parse::<TimeOfDay>().unwrap(),
        day,
        date.parse::<CalendarDate>().unwrap(),
        BASE_MILLIS,
    )
    .unwrap()
}

pub fn create_test_snapshot_at_millis(epoch_millis: i64) -> TimeSnapshot {
    TimeSnapshot::from_parts(
        TimeOfDay::new(930),
        3,
        CalendarDate::from_ymd(2011, 2, 1),
        epoch_millis,
    )
    .unwrap()
}

pub fn create_test_raw(name: &str) -> RawConstraint {
    RawConstraint {
        name: String::from(name),
        ..RawConstraint::default()
    }
}

pub fn time_constraint(begin: Option<&str>, end: Option<&str>) -> Constraint {
    let mut raw: RawConstraint = create_test_raw("auditor");
    raw.begin_time = begin.map(String::from);
    raw.end_time = end.map(String::from);
    Constraint::parse(&raw).unwrap()
}

pub fn date_constraint(begin: Option<&str>, end: Option<&str>) -> Constraint {
    let mut raw: RawConstraint = create_test_raw("auditor");
    raw.begin_date = begin.map(String::from);
    raw.end_date = end.map(String::from);
    Constraint::parse(&raw).unwrap()
}

pub fn day_constraint(mask: Option<&str>) -> Constraint {
    let mut raw: RawConstraint = create_test_raw("auditor");
    raw.day_mask = mask.map(String::from);
    Constraint::parse(&raw).unwrap()
}

pub fn lock_constraint(begin: Option<&str>, end: Option<&str>) -> Constraint {
    let mut raw: RawConstraint = create_test_raw("auditor");
    raw.begin_lock_date = begin.map(String::from);
    raw.end_lock_date = end.map(String::from);
    Constraint::parse(&raw).unwrap()
}

/// Runs a validator against a session that has never been accessed.
pub fn check(
    validator: &dyn Validator,
    constraint: &Constraint,
    now: &TimeSnapshot,
) -> Result<(), Denial> {
    validator.validate(&SessionContext::new("jdoe"), constraint, now)
}
