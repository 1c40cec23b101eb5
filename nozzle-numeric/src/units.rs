use uom::{
    si::{ISQ, Quantity, SI, specific_heat_capacity::joule_per_kilogram_kelvin},
    typenum::{N1, N2, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific gas constant of air, `R = 287 J/kg·K`.
#[must_use]
pub fn air_gas_constant() -> SpecificGasConstant {
    SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0)
}
