//! Planner error type.
//!
//! Missing or unlocatable data is never an error in this engine: reports
//! without coordinates are excluded during clustering, and an empty selection
//! routes to an empty plan. Only genuinely malformed numeric input is
//! rejected, before it can reach the distance math.

use thiserror::Error;

/// Errors surfaced by the planning engine.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PlanError {
    #[error("invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { lat: f64, lng: f64 },
}

/// Shorthand result type for planner operations.
pub type PlanResult<T> = Result<T, PlanError>;
