// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User and assignment records as handed over by the entity loader.

use crate::error::ActivationError;
use rolegate_domain::{Constraint, EntityKind, RawConstraint};

/// A role assigned to a user, with the constraint that gates its activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    /// The role name.
    pub role: String,
    /// Whether this is an RBAC or administrative role, or a per-user assignment.
    pub kind: EntityKind,
    /// The constraint checked whenever the role is activated.
    pub constraint: Constraint,
}

impl RoleAssignment {
    /// Creates a new assignment.
    #[must_use]
    pub fn new(role: &str, kind: EntityKind, constraint: Constraint) -> Self {
        Self {
            role: role.to_string(),
            kind,
            constraint,
        }
    }

    /// Creates an assignment from stored attributes; the role is `raw.name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored constraint is malformed.
    pub fn from_raw(kind: EntityKind, raw: &RawConstraint) -> Result<Self, ActivationError> {
        let constraint: Constraint = Constraint::try_from(raw)?;
        Ok(Self::new(&raw.name, kind, constraint))
    }
}

/// A user together with everything needed to gate their sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// The user id.
    pub user_id: String,
    /// The user's own constraint.
    pub constraint: Constraint,
    /// Roles the user may activate.
    pub assignments: Vec<RoleAssignment>,
}

impl UserRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(user_id: &str, constraint: Constraint, assignments: Vec<RoleAssignment>) -> Self {
        Self {
            user_id: user_id.to_string(),
            constraint,
            assignments,
        }
    }

    /// Creates a record from stored attributes; the user id is `raw.name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored constraint is malformed.
    pub fn from_raw(
        raw: &RawConstraint,
        assignments: Vec<RoleAssignment>,
    ) -> Result<Self, ActivationError> {
        let constraint: Constraint = Constraint::try_from(raw)?;
        Ok(Self::new(&raw.name, constraint, assignments))
    }

    /// Finds the assignment for `role`, ignoring case.
    #[must_use]
    pub fn assignment(&self, role: &str) -> Option<&RoleAssignment> {
        self.assignments
            .iter()
            .find(|a| a.role.eq_ignore_ascii_case(role))
    }
}
