// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-of-day window rule.
//!
//! ## Rules
//!
//! - A disabled window (`beginTime` absent or `"none"`) always passes
//! - The explicit `0000`-`0000` window always passes
//! - Otherwise the clock must satisfy `begin <= clock <= end`
//!
//! Windows never wrap past midnight. A window such as `0100`-`0000` has an
//! end before its begin and therefore rejects every clock value.

use crate::validator::Validator;
use rolegate_domain::{Constraint, Denial, SessionContext, TimeSnapshot, TimeWindow};

/// Refuses activation outside the constraint's time-of-day window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTimeValidator;

impl Validator for ClockTimeValidator {
    fn name(&self) -> &'static str {
        "clocktime"
    }

    fn validate(
        &self,
        _session: &SessionContext<'_>,
        constraint: &Constraint,
        now: &TimeSnapshot,
    ) -> Result<(), Denial> {
        let Some(window): Option<TimeWindow> = constraint.time_window() else {
            return Ok(());
        };

        if window.is_always() || window.contains(now.clock()) {
            Ok(())
        } else {
            Err(Denial::ClockTime)
        }
    }
}
