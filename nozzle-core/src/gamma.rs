use std::fmt;

use crate::ParameterError;

/// Ratio of specific heats `γ = cp / cv` for a calorically perfect gas.
///
/// Construction rejects values for which the isentropic relations are
/// undefined or unphysical, so every relation built from a
/// `SpecificHeatRatio` is safe to divide by `γ − 1`.
///
/// # Example
///
/// ```
/// use nozzle_core::{ParameterError, SpecificHeatRatio};
///
/// let air = SpecificHeatRatio::new(1.4).unwrap();
/// assert_eq!(air, SpecificHeatRatio::AIR);
///
/// assert_eq!(SpecificHeatRatio::new(1.0), Err(ParameterError::Degenerate));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct SpecificHeatRatio(f64);

impl SpecificHeatRatio {
    /// Diatomic air, `γ = 1.4`.
    pub const AIR: Self = Self(1.4);

    /// Creates a validated specific heat ratio.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the value is not finite, equals one,
    /// or is below one.
    pub fn new(value: f64) -> Result<Self, ParameterError> {
        if !value.is_finite() {
            return Err(ParameterError::NotFinite { value });
        }

        #[allow(clippy::float_cmp)]
        if value == 1.0 {
            return Err(ParameterError::Degenerate);
        }

        if value < 1.0 {
            return Err(ParameterError::Unphysical { value });
        }

        Ok(Self(value))
    }

    /// Returns the underlying value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SpecificHeatRatio {
    fn default() -> Self {
        Self::AIR
    }
}

impl TryFrom<f64> for SpecificHeatRatio {
    type Error = ParameterError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SpecificHeatRatio> for f64 {
    fn from(gamma: SpecificHeatRatio) -> Self {
        gamma.0
    }
}

impl fmt::Display for SpecificHeatRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The `γ` argument accepted by the relation builders.
///
/// A relation built with [`Gamma::Symbolic`] keeps `γ` as the free symbol
/// [`GAMMA`](crate::relations::GAMMA) so it can be inspected or bound later.
/// A relation built with [`Gamma::Bound`] closes over the concrete value and
/// depends on the Mach number alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gamma {
    /// Leave `γ` as the free symbol `gamma`.
    #[default]
    Symbolic,
    /// Substitute a concrete, validated `γ`.
    Bound(SpecificHeatRatio),
}

impl From<SpecificHeatRatio> for Gamma {
    fn from(gamma: SpecificHeatRatio) -> Self {
        Gamma::Bound(gamma)
    }
}

impl TryFrom<f64> for Gamma {
    type Error = ParameterError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        SpecificHeatRatio::new(value).map(Gamma::Bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_gases() {
        for value in [1.4, 5.0 / 3.0, 1.3, 1.0001] {
            let gamma = SpecificHeatRatio::new(value).expect("valid gamma");
            assert_eq!(gamma.value(), value);
        }
    }

    #[test]
    fn rejects_unity() {
        assert_eq!(SpecificHeatRatio::new(1.0), Err(ParameterError::Degenerate));
        assert_eq!(Gamma::try_from(1.0), Err(ParameterError::Degenerate));
    }

    #[test]
    fn rejects_below_unity() {
        assert!(matches!(
            SpecificHeatRatio::new(0.9),
            Err(ParameterError::Unphysical { .. })
        ));
        assert!(matches!(
            SpecificHeatRatio::new(-1.4),
            Err(ParameterError::Unphysical { .. })
        ));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            SpecificHeatRatio::new(f64::NAN),
            Err(ParameterError::NotFinite { .. })
        ));
        assert!(matches!(
            SpecificHeatRatio::new(f64::INFINITY),
            Err(ParameterError::NotFinite { .. })
        ));
    }

    #[test]
    fn defaults_to_air() {
        assert_eq!(SpecificHeatRatio::default().value(), 1.4);
        assert_eq!(Gamma::from(SpecificHeatRatio::AIR), Gamma::Bound(SpecificHeatRatio::AIR));
        assert_eq!(Gamma::default(), Gamma::Symbolic);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_validates_on_deserialize() {
        let gamma: SpecificHeatRatio = serde_json::from_str("1.3").unwrap();
        assert_eq!(gamma.value(), 1.3);
        assert_eq!(serde_json::to_string(&gamma).unwrap(), "1.3");

        assert!(serde_json::from_str::<SpecificHeatRatio>("1.0").is_err());
    }
}
