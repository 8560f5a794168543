// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The activation service: where sessions meet the constraint orchestrator.
//!
//! ## Invariants
//!
//! - Each operation takes one snapshot and uses it for every entity it checks
//! - Every grant or refusal produces exactly one audit event
//! - A refused user constraint refuses the whole operation
//! - A refused role constraint only keeps that role out of the session

use crate::error::ActivationError;
use crate::record::{RoleAssignment, UserRecord};
use crate::session::Session;
use rolegate::{ConstraintOrchestrator, Rejection};
use rolegate_audit::{Actor, AuditEvent, AuditSink, AuditedEntity, Outcome};
use rolegate_domain::{Constraint, EntityKind, SessionContext, TimeSnapshot};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Opens sessions and activates roles through the constraint orchestrator.
pub struct ActivationService {
    orchestrator: ConstraintOrchestrator,
    audit: Arc<dyn AuditSink>,
}

impl ActivationService {
    /// Creates a service that records decisions to `audit`.
    #[must_use]
    pub fn new(orchestrator: ConstraintOrchestrator, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            orchestrator,
            audit,
        }
    }

    /// Returns the orchestrator used for every decision.
    #[must_use]
    pub const fn orchestrator(&self) -> &ConstraintOrchestrator {
        &self.orchestrator
    }

    /// Opens a session for `user` with the requested roles.
    ///
    /// With no requested roles every assigned RBAC role is attempted;
    /// administrative roles join a session only when requested by name. Roles
    /// whose constraint refuses activation are left out of the session.
    ///
    /// # Errors
    ///
    /// Returns `UserDenied` if the user's constraint refuses the session,
    /// `RoleNotAssigned` if a requested role is not assigned to the user, or
    /// `NotARole` if a requested assignment is not a role.
    pub fn create_session(
        &self,
        user: &UserRecord,
        requested_roles: &[&str],
    ) -> Result<Session, ActivationError> {
        let candidates: Vec<&RoleAssignment> = if requested_roles.is_empty() {
            user.assignments
                .iter()
                .filter(|a| a.kind.is_role() && !a.kind.is_administrative())
                .collect()
        } else {
            requested_roles
                .iter()
                .map(|role| Self::assigned_role(user, role))
                .collect::<Result<Vec<&RoleAssignment>, ActivationError>>()?
        };

        let now: TimeSnapshot = self.orchestrator.snapshot();
        let fresh: SessionContext<'_> = SessionContext::new(&user.user_id);

        self.decide(EntityKind::User, &user.constraint, &fresh, &now)
            .map_err(|rejection| ActivationError::UserDenied {
                user: user.user_id.clone(),
                rejection,
            })?;

        let mut active: Vec<String> = Vec::with_capacity(candidates.len());
        for assignment in candidates {
            if active.iter().any(|r| r.eq_ignore_ascii_case(&assignment.role)) {
                continue;
            }
            let context: SessionContext<'_> =
                SessionContext::new(&user.user_id).with_active_roles(&active);
            if self
                .decide(assignment.kind, &assignment.constraint, &context, &now)
                .is_ok()
            {
                active.push(assignment.role.clone());
            }
        }

        let session: Session = Session::open(&user.user_id, active, &now)?;
        info!(
            user = %user.user_id,
            session = session.id(),
            roles = ?session.active_roles(),
            "Session created"
        );
        Ok(session)
    }

    /// Activates one more assigned role in an open session.
    ///
    /// # Errors
    ///
    /// Returns `RoleNotAssigned`, `NotARole`, `RoleAlreadyActive`, or
    /// `RoleDenied` if the role's constraint refuses activation.
    pub fn add_active_role(
        &self,
        session: &mut Session,
        user: &UserRecord,
        role: &str,
    ) -> Result<(), ActivationError> {
        Self::check_owner(session, user)?;

        let assignment: &RoleAssignment = Self::assigned_role(user, role)?;
        if session.is_active(role) {
            return Err(ActivationError::RoleAlreadyActive {
                role: role.to_string(),
            });
        }

        let now: TimeSnapshot = self.orchestrator.snapshot();
        self.decide(
            assignment.kind,
            &assignment.constraint,
            &session.context(),
            &now,
        )
        .map_err(|rejection| ActivationError::RoleDenied {
            role: assignment.role.clone(),
            rejection,
        })?;

        session.activate(&assignment.role);
        session.touch(now.epoch_millis());
        debug!(session = session.id(), role = %assignment.role, "Role activated");
        Ok(())
    }

    /// Re-checks an open session on access.
    ///
    /// Roles that are no longer admissible are removed and returned with the
    /// reason. Roles no longer assigned to the user are removed as well.
    ///
    /// # Errors
    ///
    /// Returns `UserDenied` if the user's constraint now refuses the session;
    /// the session must then be discarded.
    pub fn revalidate(
        &self,
        session: &mut Session,
        user: &UserRecord,
    ) -> Result<Vec<(String, Rejection)>, ActivationError> {
        Self::check_owner(session, user)?;

        let now: TimeSnapshot = self.orchestrator.snapshot();
        self.decide(EntityKind::User, &user.constraint, &session.context(), &now)
            .map_err(|rejection| ActivationError::UserDenied {
                user: user.user_id.clone(),
                rejection,
            })?;

        let mut kept: Vec<String> = Vec::with_capacity(session.active_roles().len());
        let mut removed: Vec<(String, Rejection)> = Vec::new();
        for role in session.active_roles() {
            let Some(assignment) = user.assignment(role) else {
                warn!(session = session.id(), role = %role, "Active role no longer assigned");
                continue;
            };
            let context: SessionContext<'_> = SessionContext::new(session.user_id())
                .with_last_access(session.last_access_millis())
                .with_active_roles(&kept);
            match self.decide(assignment.kind, &assignment.constraint, &context, &now) {
                Ok(()) => kept.push(role.clone()),
                Err(rejection) => removed.push((role.clone(), rejection)),
            }
        }

        session.retain_roles(kept);
        session.touch(now.epoch_millis());
        Ok(removed)
    }

    /// Runs the orchestrator for one entity and audits the decision.
    fn decide(
        &self,
        kind: EntityKind,
        constraint: &Constraint,
        context: &SessionContext<'_>,
        now: &TimeSnapshot,
    ) -> Result<(), Rejection> {
        let result: Result<(), Rejection> =
            self.orchestrator.validate_at(kind, constraint, context, now);

        let outcome: Outcome = match &result {
            Ok(()) => Outcome::Granted,
            Err(rejection) => Outcome::Denied {
                code: rejection.code(),
                reason: rejection.to_string(),
            },
        };
        self.audit.record(AuditEvent::new(
            Actor::user(context.user_id()),
            AuditedEntity::new(kind, constraint.name()),
            outcome,
            now,
        ));

        result
    }

    /// Looks up an assignment that can be activated as a role.
    fn assigned_role<'u>(
        user: &'u UserRecord,
        role: &str,
    ) -> Result<&'u RoleAssignment, ActivationError> {
        let assignment: &RoleAssignment =
            user.assignment(role)
                .ok_or_else(|| ActivationError::RoleNotAssigned {
                    user: user.user_id.clone(),
                    role: role.to_string(),
                })?;
        if !assignment.kind.is_role() {
            return Err(ActivationError::NotARole {
                role: assignment.role.clone(),
            });
        }
        Ok(assignment)
    }

    fn check_owner(session: &Session, user: &UserRecord) -> Result<(), ActivationError> {
        if session.user_id() == user.user_id {
            Ok(())
        } else {
            Err(ActivationError::SessionMismatch {
                session_user: session.user_id().to_string(),
                user: user.user_id.clone(),
            })
        }
    }
}

impl std::fmt::Debug for ActivationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationService")
            .field("orchestrator", &self.orchestrator)
            .finish_non_exhaustive()
    }
}
