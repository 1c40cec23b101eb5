//! Plotting utilities for isentropic nozzle profiles.
//!
//! Two charts are provided, each drawn in a blocking egui window:
//!
//! - [`plot_mach_profile`] draws the Mach number along the duct.
//! - [`plot_pressure_temperature_profiles`] draws static pressure on the
//!   left axis and static temperature on a right axis.
//!
//! The data is prepared as a [`Figure`] before any window is opened, so
//! [`MachPlot::figure`] and [`PressureTemperaturePlot::figure`] can be used
//! to inspect a chart without displaying it.

mod axis;
mod config;
mod error;
mod figure;

use ndarray::{ArrayBase, Data, Ix1};

pub use axis::SecondaryAxis;
pub use config::{MachPlot, PressureTemperaturePlot};
pub use error::PlotError;
pub use figure::{Figure, Trace};

/// Plots the Mach number at each station coordinate.
///
/// # Errors
///
/// Returns [`PlotError::LengthMismatch`] if `x` and `mach` differ in length,
/// or [`PlotError::Window`] if the window cannot be created.
pub fn plot_mach_profile<S1, S2>(
    x: &ArrayBase<S1, Ix1>,
    mach: &ArrayBase<S2, Ix1>,
    config: MachPlot,
) -> Result<(), PlotError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    config.figure(x, mach)?.show()
}

/// Plots static pressure and temperature at each station coordinate.
///
/// # Errors
///
/// Returns [`PlotError::LengthMismatch`] if the arrays are not aligned with
/// `x`, or [`PlotError::Window`] if the window cannot be created.
pub fn plot_pressure_temperature_profiles<S1, S2, S3>(
    x: &ArrayBase<S1, Ix1>,
    pressure: &ArrayBase<S2, Ix1>,
    temperature: &ArrayBase<S3, Ix1>,
    config: PressureTemperaturePlot,
) -> Result<(), PlotError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
{
    config.figure(x, pressure, temperature)?.show()
}
