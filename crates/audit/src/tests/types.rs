// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Actor, AuditEvent, AuditedEntity, Outcome};
use rolegate_domain::{CalendarDate, EntityKind, TimeOfDay, TimeSnapshot};

fn create_test_snapshot() -> TimeSnapshot {
    TimeSnapshot::from_parts(
        TimeOfDay::new(930),
        3,
        CalendarDate::from_ymd(2011, 2, 1),
        1_296_552_600_000,
    )
    .unwrap()
}

#[test]
fn test_actor_creation_requires_all_fields() {
    let actor: Actor = Actor::new(String::from("jdoe"), String::from("system"));

    assert_eq!(actor.id, "jdoe");
    assert_eq!(actor.actor_type, "system");
}

#[test]
fn test_user_actor() {
    assert_eq!(
        Actor::user("jdoe"),
        Actor::new(String::from("jdoe"), String::from("user"))
    );
}

#[test]
fn test_event_is_stamped_with_snapshot() {
    let event: AuditEvent = AuditEvent::new(
        Actor::user("jdoe"),
        AuditedEntity::new(EntityKind::Role, "auditor"),
        Outcome::Granted,
        &create_test_snapshot(),
    );

    assert_eq!(event.entity.kind, EntityKind::Role);
    assert_eq!(event.entity.name, "auditor");
    assert_eq!(event.date.to_string(), "20110201");
    assert_eq!(event.clock.to_string(), "0930");
    assert!(!event.outcome.is_denied());
}

#[test]
fn test_denied_outcome_carries_code_and_reason() {
    let outcome: Outcome = Outcome::Denied {
        code: 2052,
        reason: String::from("day of week not permitted"),
    };

    assert!(outcome.is_denied());
    assert_ne!(outcome, Outcome::Granted);
}

#[test]
fn test_event_serializes_outcome() {
    let event: AuditEvent = AuditEvent::new(
        Actor::user("jdoe"),
        AuditedEntity::new(EntityKind::User, "jdoe"),
        Outcome::Denied {
            code: 2054,
            reason: String::from("session idle timeout exceeded"),
        },
        &create_test_snapshot(),
    );

    let json: serde_json::Value = serde_json::to_value(&event).unwrap();
    assert_eq!(json["outcome"]["Denied"]["code"], 2054);
    assert_eq!(json["entity"]["name"], "jdoe");
}
