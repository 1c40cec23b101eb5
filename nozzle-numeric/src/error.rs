use nozzle_core::{CompileError, ParameterError};
use thiserror::Error;

/// Errors raised while constructing an [`IsentropicNozzle`](crate::IsentropicNozzle).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluatorError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error("failed to compile relation: {0}")]
    Compile(#[from] CompileError),
}

/// Errors raised while building dimensional profiles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// Arrays that must be aligned index-for-index have different lengths.
    #[error("shape mismatch: {stations} station(s) but {mach} Mach number(s)")]
    ShapeMismatch { stations: usize, mach: usize },

    /// A stagnation reference value is not finite and strictly positive.
    #[error("invalid stagnation conditions: {reason}")]
    InvalidStagnation { reason: &'static str },
}
