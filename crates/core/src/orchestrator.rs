// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Runs the temporal rules for one activation.
//!
//! ## Invariants
//!
//! - One snapshot is used for every rule in a pass
//! - Rules run in a fixed order; the first refusal ends the pass
//! - Peer (separation-of-duty) validators run only for RBAC role
//!   activations, and only once every temporal rule has passed
//!
//! ## Usage
//!
//! This logic is used by:
//! - Session creation (user constraint, then each assigned role)
//! - Adding a role to an open session
//! - Per-access revalidation of an open session

use crate::config::EngineConfig;
use crate::error::CoreError;
use crate::peer::{PeerValidator, Rejection};
use crate::validator::{Validator, ValidatorKind};
use rolegate_domain::{Clock, Constraint, EntityKind, SessionContext, SystemClock, TimeSnapshot};
use tracing::{debug, warn};

/// Ordered chain of validators sharing one clock.
pub struct ConstraintOrchestrator {
    clock: Box<dyn Clock>,
    validators: Vec<Box<dyn Validator>>,
    peers: Vec<Box<dyn PeerValidator>>,
}

impl ConstraintOrchestrator {
    /// Creates an orchestrator running the built-in rules in the default order.
    #[must_use]
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self::with_validators(
            clock,
            ValidatorKind::DEFAULT_ORDER
                .into_iter()
                .map(ValidatorKind::build)
                .collect(),
        )
    }

    /// Creates an orchestrator running exactly `validators`, in order.
    #[must_use]
    pub fn with_validators(
        clock: impl Clock + 'static,
        validators: Vec<Box<dyn Validator>>,
    ) -> Self {
        Self {
            clock: Box::new(clock),
            validators,
            peers: Vec::new(),
        }
    }

    /// Builds an orchestrator from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the zone or a validator name is invalid.
    pub fn from_config(config: &EngineConfig) -> Result<Self, CoreError> {
        let kinds: Vec<ValidatorKind> = config.validator_kinds()?;
        let clock: SystemClock = config.clock()?;

        debug!(
            timezone = %config.timezone,
            validators = ?kinds,
            "Building constraint orchestrator"
        );

        Ok(Self::with_validators(
            clock,
            kinds.into_iter().map(ValidatorKind::build).collect(),
        ))
    }

    /// Replaces the clock, keeping the validators.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Appends an externally supplied temporal validator after the existing ones.
    #[must_use]
    pub fn with_validator(mut self, validator: Box<dyn Validator>) -> Self {
        self.validators.push(validator);
        self
    }

    /// Registers a peer validator, run for RBAC role activations only.
    #[must_use]
    pub fn with_peer(mut self, peer: Box<dyn PeerValidator>) -> Self {
        self.peers.push(peer);
        self
    }

    /// Returns the validator names in evaluation order.
    #[must_use]
    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Captures a fresh snapshot from the orchestrator's clock.
    #[must_use]
    pub fn snapshot(&self) -> TimeSnapshot {
        self.clock.now()
    }

    /// Validates one constraint against a freshly captured snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] raised.
    pub fn validate(
        &self,
        kind: EntityKind,
        constraint: &Constraint,
        session: &SessionContext<'_>,
    ) -> Result<(), Rejection> {
        let now: TimeSnapshot = self.snapshot();
        self.validate_at(kind, constraint, session, &now)
    }

    /// Validates one constraint against a snapshot supplied by the caller.
    ///
    /// Use this to share one snapshot across several entities in one pass.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] raised.
    pub fn validate_at(
        &self,
        kind: EntityKind,
        constraint: &Constraint,
        session: &SessionContext<'_>,
        now: &TimeSnapshot,
    ) -> Result<(), Rejection> {
        for validator in &self.validators {
            if let Err(denial) = validator.validate(session, constraint, now) {
                warn!(
                    entity_kind = %kind,
                    entity = constraint.name(),
                    user = session.user_id(),
                    validator = validator.name(),
                    code = denial.code(),
                    snapshot = %now,
                    "Activation refused: {}",
                    denial.reason()
                );
                return Err(Rejection::Temporal(denial));
            }
        }

        if kind.participates_in_sod() {
            for peer in &self.peers {
                if let Err(violation) = peer.validate(session, constraint.name()) {
                    warn!(
                        entity_kind = %kind,
                        entity = constraint.name(),
                        user = session.user_id(),
                        validator = peer.name(),
                        policy = %violation.policy,
                        "Activation refused by separation-of-duty check"
                    );
                    return Err(Rejection::SeparationOfDuty(violation));
                }
            }
        }

        debug!(
            entity_kind = %kind,
            entity = constraint.name(),
            user = session.user_id(),
            snapshot = %now,
            "Activation admissible"
        );
        Ok(())
    }
}

impl std::fmt::Debug for ConstraintOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintOrchestrator")
            .field("validators", &self.validator_names())
            .field(
                "peers",
                &self.peers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
