// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use rolegate::ConstraintOrchestrator;
use rolegate_audit::{AuditSink, MemoryAuditLog};
use rolegate_domain::{
    CalendarDate, Constraint, DayMask, EntityKind, FixedClock, RawConstraint, TimeOfDay,
    TimeSnapshot,
};
use std::sync::Arc;

use crate::{ActivationService, RoleAssignment, UserRecord};

/// Tuesday 2011-02-01 09:30 UTC.
pub const BASE_MILLIS: i64 = 1_296_552_600_000;

pub const MINUTE: i64 = 60_000;

/// Returns the Tuesday morning snapshot, shifted by `offset_millis`.
///
/// Only the instant moves; date, clock and weekday stay on Tuesday morning,
/// which is all the idle-timeout tests need.
pub fn create_test_snapshot(offset_millis: i64) -> TimeSnapshot {
    TimeSnapshot::from_parts(
        TimeOfDay::new(930),
        3,
        CalendarDate::from_ymd(2011, 2, 1),
        BASE_MILLIS + offset_millis,
    )
    .unwrap()
}

pub fn create_test_service(snapshot: TimeSnapshot) -> (ActivationService, Arc<MemoryAuditLog>) {
    let log: Arc<MemoryAuditLog> = Arc::new(MemoryAuditLog::new());
    let sink: Arc<dyn AuditSink> = log.clone();
    let orchestrator: ConstraintOrchestrator =
        ConstraintOrchestrator::new(FixedClock::from_snapshot(snapshot));
    (ActivationService::new(orchestrator, sink), log)
}

pub fn create_test_service_at(
    snapshot: TimeSnapshot,
    log: &Arc<MemoryAuditLog>,
) -> ActivationService {
    let sink: Arc<dyn AuditSink> = log.clone();
    ActivationService::new(
        ConstraintOrchestrator::new(FixedClock::from_snapshot(snapshot)),
        sink,
    )
}

/// A role allowed on weekends only.
pub fn weekend_constraint(name: &str) -> Constraint {
    Constraint::unrestricted(name).with_day_mask(DayMask::from_digits(&[1, 7]).unwrap())
}

/// A role allowed on weekdays only.
pub fn weekday_constraint(name: &str) -> Constraint {
    Constraint::unrestricted(name).with_day_mask("23456".parse().unwrap())
}

/// jdoe: unrestricted, holding `teller` (weekdays), `auditor` (weekends)
/// and `supervisor` (30 minute idle timeout).
pub fn create_test_user() -> UserRecord {
    UserRecord::new(
        "jdoe",
        Constraint::unrestricted("jdoe"),
        vec![
            RoleAssignment::new("teller", EntityKind::Role, weekday_constraint("teller")),
            RoleAssignment::new("auditor", EntityKind::Role, weekend_constraint("auditor")),
            RoleAssignment::new(
                "supervisor",
                EntityKind::UserRole,
                Constraint::unrestricted("supervisor").with_timeout(30),
            ),
        ],
    )
}

/// A user whose own account expired at the end of 2010.
pub fn create_expired_user() -> UserRecord {
    let raw: RawConstraint = RawConstraint {
        name: String::from("old"),
        end_date: Some(String::from("20101231")),
        ..RawConstraint::default()
    };
    UserRecord::from_raw(
        &raw,
        vec![RoleAssignment::new(
            "teller",
            EntityKind::Role,
            Constraint::unrestricted("teller"),
        )],
    )
    .unwrap()
}

/// jdoe with an extra administrative role and a user-kind assignment.
pub fn create_test_admin_user() -> UserRecord {
    let mut user: UserRecord = create_test_user();
    user.assignments.push(RoleAssignment::new(
        "useradmin",
        EntityKind::AdminRole,
        Constraint::unrestricted("useradmin"),
    ));
    user.assignments.push(RoleAssignment::new(
        "asmith",
        EntityKind::User,
        Constraint::unrestricted("asmith"),
    ));
    user
}
