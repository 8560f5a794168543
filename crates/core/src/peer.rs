// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seam for peer validators that are not temporal.
//!
//! Dynamic separation-of-duty checking runs through the same orchestrator as
//! the temporal rules, but it works on role combinations rather than dates
//! and times. Its algorithm lives outside this crate; only the contract is
//! defined here.

use rolegate_domain::{Denial, SessionContext};

/// A separation-of-duty conflict reported by a peer validator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SodViolation {
    /// The separation-of-duty set that was violated.
    pub policy: String,
    /// The role whose activation would violate it.
    pub role: String,
}

impl SodViolation {
    /// Stable code for separation-of-duty rejections.
    pub const CODE: u32 = 2060;

    /// Creates a violation record.
    #[must_use]
    pub const fn new(policy: String, role: String) -> Self {
        Self { policy, role }
    }
}

impl std::fmt::Display for SodViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "role '{}' conflicts with separation-of-duty set '{}' (code {})",
            self.role,
            self.policy,
            Self::CODE
        )
    }
}

/// A validator that decides on role combinations rather than time.
pub trait PeerValidator: Send + Sync {
    /// Returns the stable name of this validator.
    fn name(&self) -> &'static str;

    /// Decides whether `role` may join the roles already active in `session`.
    ///
    /// # Errors
    ///
    /// Returns the violated set if activation must be refused.
    fn validate(&self, session: &SessionContext<'_>, role: &str) -> Result<(), SodViolation>;
}

/// Why the orchestrator refused an activation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// One of the temporal rules refused.
    Temporal(Denial),
    /// A peer separation-of-duty validator refused.
    SeparationOfDuty(SodViolation),
}

impl Rejection {
    /// Returns the stable numeric code of the rejection.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::Temporal(denial) => denial.code(),
            Self::SeparationOfDuty(_) => SodViolation::CODE,
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Temporal(denial) => write!(f, "{denial}"),
            Self::SeparationOfDuty(violation) => write!(f, "{violation}"),
        }
    }
}

impl From<Denial> for Rejection {
    fn from(denial: Denial) -> Self {
        Self::Temporal(denial)
    }
}

impl From<SodViolation> for Rejection {
    fn from(violation: SodViolation) -> Self {
        Self::SeparationOfDuty(violation)
    }
}
