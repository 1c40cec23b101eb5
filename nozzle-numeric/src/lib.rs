//! Numeric evaluation of the isentropic nozzle relations.
//!
//! [`IsentropicNozzle`] binds a specific heat ratio, compiles the four
//! relations from [`nozzle_core`] once, and evaluates them over `ndarray`
//! arrays of Mach numbers. On top of the nondimensional ratios it provides:
//!
//! - [`dimensional_profiles`](IsentropicNozzle::dimensional_profiles), which
//!   rescales the ratios by [`StagnationConditions`],
//! - [`station_profiles`](IsentropicNozzle::station_profiles), which pairs
//!   those profiles with station coordinates along the duct,
//! - [`mach_from_area_ratio`](IsentropicNozzle::mach_from_area_ratio), which
//!   inverts the area-Mach relation on a chosen [`Branch`].

mod error;
mod evaluator;
mod profiles;
mod stagnation;

pub mod inverse;
pub mod units;

pub use error::{EvaluatorError, ProfileError};
pub use evaluator::IsentropicNozzle;
pub use inverse::{Branch, InverseError};
pub use profiles::{DimensionalProfiles, FlowState, StationProfiles};
pub use stagnation::{StagnationConditions, StagnationState, ideal_gas_density};

pub use nozzle_core::{
    SpecificHeatRatio,
    relations::Ratio,
};
