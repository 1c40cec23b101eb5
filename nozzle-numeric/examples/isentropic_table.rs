use ndarray::Array1;
use nozzle_core::{
    Gamma, SpecificHeatRatio,
    relations::{Ratio, expressions_for_gamma},
};
use nozzle_numeric::{Branch, IsentropicNozzle, inverse::Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let gamma = SpecificHeatRatio::AIR;

    println!("Symbolic relations:");
    for ratio in Ratio::ALL {
        println!("  {ratio:>8} = {}", ratio.expression(Gamma::Symbolic));
    }

    println!("\nSimplified for γ = {gamma}:");
    for (ratio, expr) in expressions_for_gamma(gamma).iter() {
        println!("  {ratio:>8} = {expr}");
    }

    let nozzle = IsentropicNozzle::with_gamma(gamma)?;
    let mach = Array1::linspace(0.0, 3.0, 13);

    println!("\n{:>6} {:>9} {:>9} {:>9} {:>9}", "M", "T/T0", "p/p0", "rho/rho0", "A/A*");
    for &m in &mach {
        println!(
            "{m:>6.2} {:>9.5} {:>9.5} {:>9.5} {:>9.5}",
            nozzle.temperature_ratio_at(m),
            nozzle.pressure_ratio_at(m),
            nozzle.density_ratio_at(m),
            nozzle.area_ratio_at(m),
        );
    }

    println!("\nMach numbers for A/A* = 2:");
    for branch in [Branch::Subsonic, Branch::Supersonic] {
        let m = nozzle.mach_from_area_ratio(2.0, branch, &Config::default())?;
        println!("  {branch:>10}: M = {m:.5}");
    }

    Ok(())
}
