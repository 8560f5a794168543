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
    clippy::all
)]

//! Opening and maintaining sessions whose roles are gated by temporal
//! constraints.
//!
//! The [`ActivationService`] is the caller of the constraint orchestrator:
//! it decides which entities to check, with which session context, and
//! records every decision in the audit trail.

mod error;
mod record;
mod service;
mod session;

#[cfg(test)]
mod tests;

pub use error::ActivationError;
pub use record::{RoleAssignment, UserRecord};
pub use service::ActivationService;
pub use session::Session;
