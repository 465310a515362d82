//! Error taxonomy for the planning and scoring entry points.

use thiserror::Error;

use crate::geo::GeoPoint;

/// Convenient result alias for the planner core.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed request data. Never retried; the caller must correct the
    /// request.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// No feasible route exists with the given charger set and charge
    /// state. A legitimate planning outcome, distinct from a bad request.
    #[error("no feasible route from {start} to {goal} with the available chargers")]
    Unreachable { start: GeoPoint, goal: GeoPoint },
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
