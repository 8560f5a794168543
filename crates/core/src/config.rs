// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine configuration.
//!
//! Configuration is a small JSON document:
//!
//! ```json
//! { "timezone": "America/New_York", "validators": ["date", "lockdate", "day", "clocktime", "timeout"] }
//! ```
//!
//! Both fields are optional. Validator names are case-insensitive; the list
//! order is the evaluation order.

use crate::error::CoreError;
use crate::validator::ValidatorKind;
use rolegate_domain::SystemClock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Settings for building a [`crate::ConstraintOrchestrator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// IANA zone in which dates and times of day are evaluated.
    pub timezone: String,
    /// Temporal validators to run, in order.
    pub validators: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timezone: String::from("UTC"),
            validators: ValidatorKind::DEFAULT_ORDER
                .iter()
                .map(|kind| kind.as_str().to_string())
                .collect(),
        }
    }
}

impl EngineConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON for this schema.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Resolves the configured validator names.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is unknown or listed twice.
    pub fn validator_kinds(&self) -> Result<Vec<ValidatorKind>, CoreError> {
        let mut seen: HashSet<ValidatorKind> = HashSet::new();
        let mut kinds: Vec<ValidatorKind> = Vec::with_capacity(self.validators.len());

        for name in &self.validators {
            let kind: ValidatorKind = name.parse()?;
            if !seen.insert(kind) {
                return Err(CoreError::InvalidConfig {
                    reason: format!("validator '{kind}' listed more than once"),
                });
            }
            kinds.push(kind);
        }

        Ok(kinds)
    }

    /// Builds the system clock for the configured zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the zone is unknown.
    pub fn clock(&self) -> Result<SystemClock, CoreError> {
        SystemClock::from_name(&self.timezone).map_err(|e| CoreError::InvalidConfig {
            reason: e.to_string(),
        })
    }
}
