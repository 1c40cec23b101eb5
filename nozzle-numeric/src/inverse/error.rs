use thiserror::Error;

use super::Branch;

/// Errors that can occur when inverting the area-Mach relation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InverseError {
    /// No Mach number has an area ratio below the sonic throat value.
    #[error("area ratio {area_ratio} is below the sonic throat value of 1")]
    BelowSonic { area_ratio: f64 },

    #[error("area ratio must be finite, got {area_ratio}")]
    NonFinite { area_ratio: f64 },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("could not bracket a {branch} solution for area ratio {area_ratio}")]
    NoBracket { area_ratio: f64, branch: Branch },

    #[error("non-finite residual {residual} at M = {mach}")]
    NonFiniteResidual { mach: f64, residual: f64 },

    #[error("no convergence after {iters} iterations, best estimate M = {best}")]
    MaxIters { iters: usize, best: f64 },
}
