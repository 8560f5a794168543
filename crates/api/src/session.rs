// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Open sessions.

use crate::error::ActivationError;
use rolegate_domain::{SessionContext, TimeSnapshot};
use time::OffsetDateTime;

const NANOS_PER_MILLI: i128 = 1_000_000;

/// A user session and the roles currently active in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
    user_id: String,
    active_roles: Vec<String>,
    last_access_millis: i64,
    created_at: OffsetDateTime,
}

impl Session {
    /// Opens a session at the snapshot instant.
    pub(crate) fn open(
        user_id: &str,
        active_roles: Vec<String>,
        now: &TimeSnapshot,
    ) -> Result<Self, ActivationError> {
        let created_at: OffsetDateTime = OffsetDateTime::from_unix_timestamp_nanos(
            i128::from(now.epoch_millis()) * NANOS_PER_MILLI,
        )
        .map_err(|_| ActivationError::InstantOutOfRange {
            epoch_millis: now.epoch_millis(),
        })?;

        Ok(Self {
            id: Self::generate_session_id(created_at),
            user_id: user_id.to_string(),
            active_roles,
            last_access_millis: now.epoch_millis(),
            created_at,
        })
    }

    /// Returns the opaque session id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the id of the session's user.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the active role names in activation order.
    #[must_use]
    pub fn active_roles(&self) -> &[String] {
        &self.active_roles
    }

    /// Returns the last access instant in Unix milliseconds.
    #[must_use]
    pub const fn last_access_millis(&self) -> i64 {
        self.last_access_millis
    }

    /// Returns when the session was opened, per the orchestrator's clock.
    #[must_use]
    pub const fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// Returns whether `role` is active, ignoring case.
    #[must_use]
    pub fn is_active(&self, role: &str) -> bool {
        self.context().has_active_role(role)
    }

    /// Returns the context the validators see for this session.
    #[must_use]
    pub fn context(&self) -> SessionContext<'_> {
        SessionContext::new(&self.user_id)
            .with_last_access(self.last_access_millis)
            .with_active_roles(&self.active_roles)
    }

    /// Deactivates a role.
    ///
    /// # Errors
    ///
    /// Returns `RoleNotActive` if the role is not active.
    pub fn drop_active_role(&mut self, role: &str) -> Result<(), ActivationError> {
        let index: usize = self
            .active_roles
            .iter()
            .position(|r| r.eq_ignore_ascii_case(role))
            .ok_or_else(|| ActivationError::RoleNotActive {
                role: role.to_string(),
            })?;
        self.active_roles.remove(index);
        Ok(())
    }

    pub(crate) fn activate(&mut self, role: &str) {
        self.active_roles.push(role.to_string());
    }

    pub(crate) fn retain_roles(&mut self, roles: Vec<String>) {
        self.active_roles = roles;
    }

    pub(crate) const fn touch(&mut self, now_millis: i64) {
        self.last_access_millis = now_millis;
    }

    fn generate_session_id(created_at: OffsetDateTime) -> String {
        format!(
            "session_{}_{}",
            created_at.unix_timestamp_nanos(),
            rand::random::<u64>()
        )
    }
}
