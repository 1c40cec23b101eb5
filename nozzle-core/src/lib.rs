//! Symbolic isentropic relations for quasi-one-dimensional nozzle flow.
//!
//! The [`relations`] module defines the temperature, pressure, density, and
//! area-Mach ratios as [`Expr`](expr::Expr) trees in the Mach number,
//! parametrized by the specific heat ratio. The [`expr`] module supplies the
//! substitution, simplification, and compilation those relations rely on.
//!
//! # Example
//!
//! ```
//! use nozzle_core::{
//!     SpecificHeatRatio,
//!     relations::{MACH, Ratio, expressions_for_gamma},
//! };
//!
//! let exprs = expressions_for_gamma(SpecificHeatRatio::AIR);
//! let area = exprs.get(Ratio::Area).compile(MACH).unwrap();
//!
//! assert!((area.eval(2.0) - 1.6875).abs() < 1e-12);
//! ```

mod error;
mod gamma;

pub mod expr;
pub mod relations;

pub use error::{CompileError, ParameterError};
pub use gamma::{Gamma, SpecificHeatRatio};
