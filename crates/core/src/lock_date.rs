// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lockout (blackout) window rule.
//!
//! This is the inverse of the date range rule: the window lists the dates on
//! which activation is forbidden. Both ends are inclusive.

use crate::validator::Validator;
use rolegate_domain::{Constraint, Denial, SessionContext, TimeSnapshot};

/// Refuses activation while today is inside the constraint's lockout window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockDateValidator;

impl Validator for LockDateValidator {
    fn name(&self) -> &'static str {
        "lockdate"
    }

    fn validate(
        &self,
        _session: &SessionContext<'_>,
        constraint: &Constraint,
        now: &TimeSnapshot,
    ) -> Result<(), Denial> {
        match constraint.lock_window() {
            Some(window) if window.contains(now.date()) => Err(Denial::LockDate),
            _ => Ok(()),
        }
    }
}
