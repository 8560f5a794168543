// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Errors raised by the activation service.

use rolegate::Rejection;
use rolegate_domain::DomainError;
use thiserror::Error;

/// Activation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActivationError {
    /// The user's own constraint refused the session.
    #[error("User '{user}' may not open a session: {rejection}")]
    UserDenied { user: String, rejection: Rejection },

    /// A role's constraint refused its activation.
    #[error("Role '{role}' may not be activated: {rejection}")]
    RoleDenied { role: String, rejection: Rejection },

    /// The role is not assigned to the user.
    #[error("Role '{role}' is not assigned to user '{user}'")]
    RoleNotAssigned { user: String, role: String },

    /// The assignment names a user, not a role.
    #[error("'{role}' is not a role")]
    NotARole { role: String },

    /// The snapshot instant cannot be represented as a session timestamp.
    #[error("Snapshot instant {epoch_millis} ms is out of range")]
    InstantOutOfRange { epoch_millis: i64 },

    /// The role is already active in the session.
    #[error("Role '{role}' is already active")]
    RoleAlreadyActive { role: String },

    /// The role is not active in the session.
    #[error("Role '{role}' is not active")]
    RoleNotActive { role: String },

    /// The session belongs to a different user.
    #[error("Session belongs to '{session_user}', not '{user}'")]
    SessionMismatch { session_user: String, user: String },

    /// Stored constraint data could not be read.
    #[error("Malformed constraint: {0}")]
    MalformedConstraint(#[from] DomainError),
}
