//! Profiles along a converging-diverging nozzle with a sonic throat.
//!
//! The duct area is `A/A* = 1 + 2.2·(x - 1.5)²` for `0 ≤ x ≤ 3`, the classic
//! quasi-one-dimensional test case. The flow is subsonic upstream of the
//! throat and supersonic downstream of it.

use ndarray::Array1;
use nozzle_numeric::{Branch, IsentropicNozzle, StagnationConditions, inverse::Config};
use nozzle_plot::{
    MachPlot, PressureTemperaturePlot, plot_mach_profile, plot_pressure_temperature_profiles,
};
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

const THROAT: f64 = 1.5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let nozzle = IsentropicNozzle::air()?;
    let config = Config::default();

    let x = Array1::linspace(0.0, 3.0, 31);
    let area = x.mapv(|x| 1.0 + 2.2 * (x - THROAT).powi(2));

    let mut mach = Array1::<f64>::zeros(x.len());
    for ((m, &position), &area) in mach.iter_mut().zip(&x).zip(&area) {
        let branch = if position < THROAT {
            Branch::Subsonic
        } else {
            Branch::Supersonic
        };
        *m = nozzle.mach_from_area_ratio(area, branch, &config)?;
    }

    let conditions = StagnationConditions::default()
        .with_temperature(ThermodynamicTemperature::new::<kelvin>(500.0));
    let profiles = nozzle.station_profiles(&x, &mach, &conditions)?;

    plot_mach_profile(
        &profiles.stations,
        &profiles.profiles.mach,
        MachPlot::new().x_label("x [m]"),
    )?;

    plot_pressure_temperature_profiles(
        &profiles.stations,
        &profiles.profiles.pressure,
        &profiles.profiles.temperature,
        PressureTemperaturePlot::new().x_label("x [m]"),
    )?;

    Ok(())
}
