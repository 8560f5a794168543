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

//! Audit records for activation decisions.
//!
//! Every grant or refusal made while opening or maintaining a session
//! produces exactly one [`AuditEvent`]. Events are immutable once created and
//! capture:
//! - Who asked (actor)
//! - What was being activated (entity)
//! - What was decided (outcome)
//! - When, in the encodings the rules compared against (date and clock)

use rolegate_domain::{CalendarDate, EntityKind, TimeOfDay, TimeSnapshot};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

#[cfg(test)]
mod tests;

/// Represents the entity performing an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "user", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// Creates an actor for a user opening or using a session.
    #[must_use]
    pub fn user(id: &str) -> Self {
        Self::new(id.to_string(), String::from("user"))
    }
}

/// The user or role whose constraint was evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditedEntity {
    /// What sort of entity was evaluated.
    pub kind: EntityKind,
    /// The user id or role name.
    pub name: String,
}

impl AuditedEntity {
    /// Creates a new `AuditedEntity`.
    #[must_use]
    pub fn new(kind: EntityKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}

/// The decision recorded by an audit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Activation was allowed.
    Granted,
    /// Activation was refused.
    Denied {
        /// Stable numeric code of the refusal.
        code: u32,
        /// Human-readable reason.
        reason: String,
    },
}

impl Outcome {
    /// Returns whether this outcome refused activation.
    #[must_use]
    pub const fn is_denied(&self) -> bool {
        matches!(self, Self::Denied { .. })
    }
}

/// An immutable record of one activation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The actor who asked for the activation.
    pub actor: Actor,
    /// The entity whose constraint was evaluated.
    pub entity: AuditedEntity,
    /// What was decided.
    pub outcome: Outcome,
    /// Snapshot date the decision was made on.
    pub date: CalendarDate,
    /// Snapshot time of day the decision was made at.
    pub clock: TimeOfDay,
}

impl AuditEvent {
    /// Creates a new `AuditEvent` stamped with the snapshot used for the decision.
    #[must_use]
    pub const fn new(
        actor: Actor,
        entity: AuditedEntity,
        outcome: Outcome,
        snapshot: &TimeSnapshot,
    ) -> Self {
        Self {
            actor,
            entity,
            outcome,
            date: snapshot.date(),
            clock: snapshot.clock(),
        }
    }
}

/// Destination for audit events.
pub trait AuditSink: Send + Sync {
    /// Records one event. Recording never fails from the caller's view.
    fn record(&self, event: AuditEvent);
}

/// An in-memory audit log that keeps events in arrival order.
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of every recorded event, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAuditLog {
    fn record(&self, event: AuditEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
