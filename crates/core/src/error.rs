// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while building or running the constraint engine.
///
/// Temporal rejections are not errors; see [`crate::Rejection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The engine configuration is invalid.
    InvalidConfig {
        /// Why the configuration was rejected.
        reason: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "Invalid engine configuration: {reason}"),
        }
    }
}

impl std::error::Error for CoreError {}
