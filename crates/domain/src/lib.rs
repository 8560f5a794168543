// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod constraint;
mod denial;
mod error;
mod snapshot;
mod types;

#[cfg(test)]
mod tests;

pub use constraint::{
    ALL_SENTINEL, Constraint, LockWindow, NONE_SENTINEL, RawConstraint, TimeWindow,
};
pub use denial::Denial;
pub use error::DomainError;
pub use snapshot::{Clock, FixedClock, SystemClock, TimeSnapshot};
pub use types::{CalendarDate, DayMask, EntityKind, SessionContext, TimeOfDay};
