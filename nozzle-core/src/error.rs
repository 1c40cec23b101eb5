use thiserror::Error;

use crate::expr::Symbol;

/// Errors raised when binding a specific heat ratio.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    /// The relations divide by `γ − 1` and are undefined for `γ = 1`.
    #[error("isentropic relations are undefined for γ = 1")]
    Degenerate,

    /// A value below one is thermodynamically invalid (`cp < cv`).
    #[error("γ must be greater than 1, got {value}")]
    Unphysical { value: f64 },

    /// NaN or infinite input.
    #[error("γ must be finite, got {value}")]
    NotFinite { value: f64 },
}

/// Errors raised when compiling an expression into a numeric function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// A symbol other than the compiled variable is still free.
    #[error("symbol `{symbol}` is unbound; substitute a value before compiling")]
    UnboundSymbol { symbol: Symbol },

    /// A constant subexpression is NaN or infinite.
    ///
    /// For example, substituting `γ = 1` directly into a symbolic relation.
    #[error("expression contains a non-finite constant: {value}")]
    NonFiniteConstant { value: f64 },
}
