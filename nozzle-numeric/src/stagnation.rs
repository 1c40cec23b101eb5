use log::debug;
use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{
    ProfileError,
    units::{SpecificGasConstant, air_gas_constant},
};

/// Stagnation reference values used to dimensionalize the isentropic ratios.
///
/// The density is optional. When omitted it is derived from the ideal gas
/// law, `ρ0 = p0 / (R·T0)`, using [`gas_constant`](Self::gas_constant).
///
/// Defaults to 300 K, 100 kPa, no density, and `R = 287 J/kg·K` (air).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StagnationConditions {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub density: Option<MassDensity>,
    pub gas_constant: SpecificGasConstant,
}

impl Default for StagnationConditions {
    fn default() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
            pressure: Pressure::new::<pascal>(1.0e5),
            density: None,
            gas_constant: air_gas_constant(),
        }
    }
}

impl StagnationConditions {
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self { pressure, ..self }
    }

    #[must_use]
    pub fn with_density(self, density: MassDensity) -> Self {
        Self {
            density: Some(density),
            ..self
        }
    }

    #[must_use]
    pub fn with_gas_constant(self, gas_constant: SpecificGasConstant) -> Self {
        Self {
            gas_constant,
            ..self
        }
    }

    /// Validates that all reference values are finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidStagnation`] naming the offending value.
    pub fn validate(&self) -> Result<(), ProfileError> {
        check(
            self.temperature.get::<kelvin>(),
            "temperature must be finite and positive",
        )?;
        check(
            self.pressure.get::<pascal>(),
            "pressure must be finite and positive",
        )?;
        if let Some(density) = self.density {
            check(
                density.get::<kilogram_per_cubic_meter>(),
                "density must be finite and positive",
            )?;
        }
        check(
            self.gas_constant.get::<joule_per_kilogram_kelvin>(),
            "gas constant must be finite and positive",
        )
    }

    /// Validates the conditions and fills in the density if it was omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidStagnation`] if validation fails.
    pub fn resolve(&self) -> Result<StagnationState, ProfileError> {
        self.validate()?;

        let density = match self.density {
            Some(density) => density,
            None => {
                let density = ideal_gas_density(self.temperature, self.pressure, self.gas_constant);
                debug!(
                    "derived stagnation density {:.6} kg/m³ from the ideal gas law",
                    density.get::<kilogram_per_cubic_meter>()
                );
                density
            }
        };

        Ok(StagnationState {
            temperature: self.temperature,
            pressure: self.pressure,
            density,
        })
    }
}

fn check(value: f64, reason: &'static str) -> Result<(), ProfileError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ProfileError::InvalidStagnation { reason })
    }
}

/// Computes density using the ideal gas law, `ρ = p / (R·T)`.
#[must_use]
pub fn ideal_gas_density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> MassDensity {
    let t = temperature.get::<kelvin>();
    let p = pressure.get::<pascal>();
    let r = gas_constant.get::<joule_per_kilogram_kelvin>();

    MassDensity::new::<kilogram_per_cubic_meter>(p / (r * t))
}

/// Fully resolved stagnation state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StagnationState {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub density: MassDensity,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{pressure::kilopascal, thermodynamic_temperature::degree_celsius};

    #[test]
    fn default_derives_air_density() {
        let state = StagnationConditions::default().resolve().unwrap();

        assert_eq!(state.temperature.get::<kelvin>(), 300.0);
        assert_eq!(state.pressure.get::<pascal>(), 1.0e5);
        assert_relative_eq!(
            state.density.get::<kilogram_per_cubic_meter>(),
            1.0e5 / (287.0 * 300.0),
            max_relative = 1e-14
        );
        assert_relative_eq!(
            state.density.get::<kilogram_per_cubic_meter>(),
            1.1614,
            epsilon = 1e-4
        );
    }

    #[test]
    fn explicit_density_is_kept() {
        let density = MassDensity::new::<kilogram_per_cubic_meter>(2.5);
        let state = StagnationConditions::default()
            .with_density(density)
            .resolve()
            .unwrap();

        assert_eq!(state.density, density);
    }

    #[test]
    fn accepts_any_units() {
        let conditions = StagnationConditions::default()
            .with_temperature(ThermodynamicTemperature::new::<degree_celsius>(26.85))
            .with_pressure(Pressure::new::<kilopascal>(100.0));
        let state = conditions.resolve().unwrap();

        assert_relative_eq!(state.temperature.get::<kelvin>(), 300.0, epsilon = 1e-9);
        assert_relative_eq!(
            state.density.get::<kilogram_per_cubic_meter>(),
            1.0e5 / (287.0 * 300.0),
            max_relative = 1e-9
        );
    }

    #[test]
    fn custom_gas_constant() {
        let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(2077.0);
        let state = StagnationConditions::default()
            .with_gas_constant(r)
            .resolve()
            .unwrap();

        assert_relative_eq!(
            state.density.get::<kilogram_per_cubic_meter>(),
            1.0e5 / (2077.0 * 300.0),
            max_relative = 1e-14
        );
    }

    #[test]
    fn rejects_non_positive_references() {
        let zero_pressure =
            StagnationConditions::default().with_pressure(Pressure::new::<pascal>(0.0));
        assert!(matches!(
            zero_pressure.validate(),
            Err(ProfileError::InvalidStagnation { .. })
        ));

        let nan_density = StagnationConditions::default()
            .with_density(MassDensity::new::<kilogram_per_cubic_meter>(f64::NAN));
        assert!(nan_density.resolve().is_err());

        let cold = StagnationConditions::default()
            .with_temperature(ThermodynamicTemperature::new::<kelvin>(0.0));
        assert_eq!(
            cold.validate(),
            Err(ProfileError::InvalidStagnation {
                reason: "temperature must be finite and positive"
            })
        );
    }
}
