// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::validator::Validator;
use rolegate_domain::{Constraint, Denial, SessionContext, TimeSnapshot};

/// Refuses activation on weekdays missing from the constraint's day mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayValidator;

impl Validator for DayValidator {
    fn name(&self) -> &'static str {
        "day"
    }

    fn validate(
        &self,
        _session: &SessionContext<'_>,
        constraint: &Constraint,
        now: &TimeSnapshot,
    ) -> Result<(), Denial> {
        match constraint.day_mask() {
            Some(mask) if !mask.contains(now.day_digit()) => Err(Denial::Day),
            _ => Ok(()),
        }
    }
}
