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

mod clock_time;
mod config;
mod date;
mod day;
mod error;
mod lock_date;
mod orchestrator;
mod peer;
mod timeout;
mod validator;

#[cfg(test)]
mod tests;

// Re-export public types
pub use clock_time::ClockTimeValidator;
pub use config::EngineConfig;
pub use date::DateValidator;
pub use day::DayValidator;
pub use error::CoreError;
pub use lock_date::LockDateValidator;
pub use orchestrator::ConstraintOrchestrator;
pub use peer::{PeerValidator, Rejection, SodViolation};
pub use timeout::TimeoutValidator;
pub use validator::{Validator, ValidatorKind};
