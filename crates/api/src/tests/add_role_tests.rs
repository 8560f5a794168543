// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rolegate::Rejection;
use rolegate_domain::{Constraint, Denial, EntityKind};

use super::helpers::{
    MINUTE, create_test_admin_user, create_test_service, create_test_snapshot, create_test_user,
};
use crate::{ActivationError, RoleAssignment, Session, UserRecord};

#[test]
fn test_add_assigned_role() {
    let (service, _log) = create_test_service(create_test_snapshot(0));
    let user: UserRecord = create_test_user();
    let mut session: Session = service.create_session(&user, &["teller"]).unwrap();

    service
        .add_active_role(&mut session, &user, "supervisor")
        .unwrap();

    assert_eq!(session.active_roles(), ["teller", "supervisor"]);
}

#[test]
fn test_add_refreshes_last_access() {
    let (opening, log) = create_test_service(create_test_snapshot(0));
    let user: UserRecord = create_test_user();
    let mut session: Session = opening.create_session(&user, &["teller"]).unwrap();

    let later = super::helpers::create_test_service_at(create_test_snapshot(5 * MINUTE), &log);
    later
        .add_active_role(&mut session, &user, "supervisor")
        .unwrap();

    assert_eq!(
        session.last_access_millis(),
        create_test_snapshot(5 * MINUTE).epoch_millis()
    );
}

#[test]
fn test_add_unassigned_role() {
    let (service, _log) = create_test_service(create_test_snapshot(0));
    let user: UserRecord = create_test_user();
    let mut session: Session = service.create_session(&user, &["teller"]).unwrap();

    assert_eq!(
        service.add_active_role(&mut session, &user, "root"),
        Err(ActivationError::RoleNotAssigned {
            user: String::from("jdoe"),
            role: String::from("root"),
        })
    );
}

#[test]
fn test_add_already_active_role() {
    let (service, _log) = create_test_service(create_test_snapshot(0));
    let user: UserRecord = create_test_user();
    let mut session: Session = service.create_session(&user, &["teller"]).unwrap();

    assert_eq!(
        service.add_active_role(&mut session, &user, "Teller"),
        Err(ActivationError::RoleAlreadyActive {
            role: String::from("Teller"),
        })
    );
}

#[test]
fn test_add_denied_role() {
    let (service, log) = create_test_service(create_test_snapshot(0));
    let user: UserRecord = create_test_user();
    let mut session: Session = service.create_session(&user, &["teller"]).unwrap();
    let recorded: usize = log.len();

    assert_eq!(
        service.add_active_role(&mut session, &user, "auditor"),
        Err(ActivationError::RoleDenied {
            role: String::from("auditor"),
            rejection: Rejection::Temporal(Denial::Day),
        })
    );
    assert_eq!(session.active_roles(), ["teller"]);
    assert_eq!(log.len(), recorded + 1);
}

#[test]
fn test_add_role_uses_session_idle_time() {
    let mut user: UserRecord = create_test_user();
    user.assignments.push(RoleAssignment::new(
        "cashier",
        EntityKind::Role,
        Constraint::unrestricted("cashier").with_timeout(10),
    ));
    let (opening, log) = create_test_service(create_test_snapshot(0));
    let mut session: Session = opening.create_session(&user, &["teller"]).unwrap();

    let later = super::helpers::create_test_service_at(create_test_snapshot(11 * MINUTE), &log);
    assert_eq!(
        later.add_active_role(&mut session, &user, "cashier"),
        Err(ActivationError::RoleDenied {
            role: String::from("cashier"),
            rejection: Rejection::Temporal(Denial::Timeout),
        })
    );
}

#[test]
fn test_add_role_to_another_users_session() {
    let (service, _log) = create_test_service(create_test_snapshot(0));
    let user: UserRecord = create_test_user();
    let mut session: Session = service.create_session(&user, &["teller"]).unwrap();
    let mut other: UserRecord = create_test_user();
    other.user_id = String::from("asmith");

    assert_eq!(
        service.add_active_role(&mut session, &other, "supervisor"),
        Err(ActivationError::SessionMismatch {
            session_user: String::from("jdoe"),
            user: String::from("asmith"),
        })
    );
}

#[test]
fn test_drop_active_role() {
    let (service, _log) = create_test_service(create_test_snapshot(0));
    let mut session: Session = service.create_session(&create_test_user(), &[]).unwrap();

    session.drop_active_role("TELLER").unwrap();

    assert_eq!(session.active_roles(), ["supervisor"]);
    assert_eq!(
        session.drop_active_role("teller"),
        Err(ActivationError::RoleNotActive {
            role: String::from("teller"),
        })
    );
}

#[test]
fn test_add_user_assignment_is_refused() {
    let (service, _log) = create_test_service(create_test_snapshot(0));
    let user: UserRecord = create_test_admin_user();
    let mut session: Session = service.create_session(&user, &["teller"]).unwrap();

    assert_eq!(
        service.add_active_role(&mut session, &user, "asmith"),
        Err(ActivationError::NotARole {
            role: String::from("asmith"),
        })
    );
    assert_eq!(session.active_roles(), ["teller"]);
}

#[test]
fn test_add_administrative_role_on_request() {
    let (service, _log) = create_test_service(create_test_snapshot(0));
    let user: UserRecord = create_test_admin_user();
    let mut session: Session = service.create_session(&user, &[]).unwrap();

    service
        .add_active_role(&mut session, &user, "useradmin")
        .unwrap();

    assert!(session.is_active("UserAdmin"));
}
