// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::validator::Validator;
use rolegate_domain::{Constraint, Denial, SessionContext, TimeSnapshot};

/// Refuses activation outside the constraint's date range.
///
/// Each bound is optional on its own; a missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateValidator;

impl Validator for DateValidator {
    fn name(&self) -> &'static str {
        "date"
    }

    fn validate(
        &self,
        _session: &SessionContext<'_>,
        constraint: &Constraint,
        now: &TimeSnapshot,
    ) -> Result<(), Denial> {
        let today = now.date();

        let after_begin: bool = constraint.begin_date().is_none_or(|begin| begin <= today);
        let before_end: bool = constraint.end_date().is_none_or(|end| today <= end);

        if after_begin && before_end {
            Ok(())
        } else {
            Err(Denial::Date)
        }
    }
}
