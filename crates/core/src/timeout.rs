// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session idle timeout rule.
//!
//! ## Rules
//!
//! - A session that was never accessed (last access `0`) always passes
//! - A timeout of `0` minutes never expires
//! - Otherwise the idle time must be strictly below the limit; idling for
//!   exactly the limit fails

use crate::validator::Validator;
use rolegate_domain::{Constraint, Denial, SessionContext, TimeSnapshot};

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Refuses activation once the session has idled past the constraint's timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeoutValidator;

impl Validator for TimeoutValidator {
    fn name(&self) -> &'static str {
        "timeout"
    }

    fn validate(
        &self,
        session: &SessionContext<'_>,
        constraint: &Constraint,
        now: &TimeSnapshot,
    ) -> Result<(), Denial> {
        let last_access: i64 = session.last_access_millis();
        if last_access == 0 || constraint.timeout_minutes() == 0 {
            return Ok(());
        }

        let elapsed: i64 = now.epoch_millis().saturating_sub(last_access);
        let limit: i64 = i64::from(constraint.timeout_minutes()) * MILLIS_PER_MINUTE;

        if elapsed < limit {
            Ok(())
        } else {
            Err(Denial::Timeout)
        }
    }
}
