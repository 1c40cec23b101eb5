use ndarray::{Array1, ArrayBase, Data, Ix1};
use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::{IsentropicNozzle, ProfileError, StagnationConditions, StagnationState};

/// Dimensional flow fields along a Mach number distribution.
///
/// Every array is aligned index-for-index with [`mach`](Self::mach).
/// Temperature is in kelvin, pressure in pascal, and density in kg/m³.
/// The area ratio `A/A*` is nondimensional.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionalProfiles {
    pub mach: Array1<f64>,
    pub temperature: Array1<f64>,
    pub pressure: Array1<f64>,
    pub density: Array1<f64>,
    pub area_ratio: Array1<f64>,
    pub stagnation: StagnationState,
}

impl DimensionalProfiles {
    #[must_use]
    pub fn len(&self) -> usize {
        self.mach.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mach.is_empty()
    }

    /// Returns the unit-typed flow state at `index`, if it exists.
    #[must_use]
    pub fn station(&self, index: usize) -> Option<FlowState> {
        Some(FlowState {
            mach: *self.mach.get(index)?,
            temperature: ThermodynamicTemperature::new::<kelvin>(*self.temperature.get(index)?),
            pressure: Pressure::new::<pascal>(*self.pressure.get(index)?),
            density: MassDensity::new::<kilogram_per_cubic_meter>(*self.density.get(index)?),
            area_ratio: *self.area_ratio.get(index)?,
        })
    }
}

/// The static flow state at one point of a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    pub mach: f64,
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub density: MassDensity,
    pub area_ratio: f64,
}

/// Dimensional profiles paired with the station coordinate of each point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationProfiles {
    pub stations: Array1<f64>,
    pub profiles: DimensionalProfiles,
}

impl IsentropicNozzle {
    /// Rescales the isentropic ratios at each Mach number by the stagnation
    /// reference values.
    ///
    /// `T = (T/T0)·T0`, `p = (p/p0)·p0`, and `ρ = (ρ/ρ0)·ρ0`, where `ρ0` is
    /// derived from the ideal gas law when `conditions` omits it.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidStagnation`] if the stagnation
    /// conditions are not finite and positive.
    pub fn dimensional_profiles<S>(
        &self,
        mach: &ArrayBase<S, Ix1>,
        conditions: &StagnationConditions,
    ) -> Result<DimensionalProfiles, ProfileError>
    where
        S: Data<Elem = f64>,
    {
        let stagnation = conditions.resolve()?;

        let t0 = stagnation.temperature.get::<kelvin>();
        let p0 = stagnation.pressure.get::<pascal>();
        let rho0 = stagnation.density.get::<kilogram_per_cubic_meter>();

        Ok(DimensionalProfiles {
            mach: mach.to_owned(),
            temperature: self.temperature_ratio(mach) * t0,
            pressure: self.pressure_ratio(mach) * p0,
            density: self.density_ratio(mach) * rho0,
            area_ratio: self.area_ratio(mach),
            stagnation,
        })
    }

    /// Builds dimensional profiles at a set of stations along the duct.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::ShapeMismatch`] if `stations` and `mach` have
    /// different lengths, or any error from [`Self::dimensional_profiles`].
    pub fn station_profiles<S1, S2>(
        &self,
        stations: &ArrayBase<S1, Ix1>,
        mach: &ArrayBase<S2, Ix1>,
        conditions: &StagnationConditions,
    ) -> Result<StationProfiles, ProfileError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        if stations.len() != mach.len() {
            return Err(ProfileError::ShapeMismatch {
                stations: stations.len(),
                mach: mach.len(),
            });
        }

        Ok(StationProfiles {
            stations: stations.to_owned(),
            profiles: self.dimensional_profiles(mach, conditions)?,
        })
    }
}
