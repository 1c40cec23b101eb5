use log::debug;
use ndarray::{Array, ArrayBase, Data, Dimension};
use nozzle_core::{
    SpecificHeatRatio,
    expr::CompiledExpr,
    relations::{MACH, Ratio, expressions_for_gamma},
};

use crate::EvaluatorError;

/// Numeric evaluator for the isentropic relations at a fixed `γ`.
///
/// The four relations are substituted, simplified, and compiled once at
/// construction. Evaluation is element-wise over any `ndarray` array and
/// returns an array of the same shape.
///
/// Mach numbers are not validated. At `M = 0` the stagnation ratios are
/// exactly one and the area ratio is `+∞`, its pole. Negative Mach numbers
/// are physically meaningless and produce whatever the formulas give.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use nozzle_numeric::IsentropicNozzle;
///
/// let nozzle = IsentropicNozzle::air().unwrap();
/// let t = nozzle.temperature_ratio(&array![0.0, 1.0, 2.0]);
///
/// assert_eq!(t[0], 1.0);
/// assert!((t[2] - 5.0 / 9.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IsentropicNozzle {
    gamma: SpecificHeatRatio,
    temperature: CompiledExpr,
    pressure: CompiledExpr,
    density: CompiledExpr,
    area: CompiledExpr,
}

impl IsentropicNozzle {
    /// Creates an evaluator for the given specific heat ratio.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluatorError::Parameter`] if `gamma` is not a valid
    /// specific heat ratio (for example `1.0`).
    pub fn new(gamma: f64) -> Result<Self, EvaluatorError> {
        Self::with_gamma(SpecificHeatRatio::new(gamma)?)
    }

    /// Creates an evaluator for air, `γ = 1.4`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the relations fail to compile.
    pub fn air() -> Result<Self, EvaluatorError> {
        Self::with_gamma(SpecificHeatRatio::AIR)
    }

    /// Creates an evaluator from a validated specific heat ratio.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluatorError::Compile`] if a relation fails to compile.
    pub fn with_gamma(gamma: SpecificHeatRatio) -> Result<Self, EvaluatorError> {
        let exprs = expressions_for_gamma(gamma);
        let compile = |ratio| exprs.get(ratio).compile(MACH);

        let nozzle = Self {
            gamma,
            temperature: compile(Ratio::Temperature)?,
            pressure: compile(Ratio::Pressure)?,
            density: compile(Ratio::Density)?,
            area: compile(Ratio::Area)?,
        };

        debug!("compiled isentropic relations for γ = {gamma}");
        Ok(nozzle)
    }

    #[must_use]
    pub fn gamma(&self) -> SpecificHeatRatio {
        self.gamma
    }

    fn compiled(&self, ratio: Ratio) -> &CompiledExpr {
        match ratio {
            Ratio::Temperature => &self.temperature,
            Ratio::Pressure => &self.pressure,
            Ratio::Density => &self.density,
            Ratio::Area => &self.area,
        }
    }

    /// Evaluates `ratio` at each Mach number.
    #[must_use]
    pub fn ratio<S, D>(&self, ratio: Ratio, mach: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let f = self.compiled(ratio);
        mach.mapv(|m| f.eval(m))
    }

    /// Evaluates `ratio` at a single Mach number.
    #[must_use]
    pub fn ratio_at(&self, ratio: Ratio, mach: f64) -> f64 {
        self.compiled(ratio).eval(mach)
    }

    /// `T/T0` at each Mach number.
    #[must_use]
    pub fn temperature_ratio<S, D>(&self, mach: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        self.ratio(Ratio::Temperature, mach)
    }

    /// `p/p0` at each Mach number.
    #[must_use]
    pub fn pressure_ratio<S, D>(&self, mach: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        self.ratio(Ratio::Pressure, mach)
    }

    /// `ρ/ρ0` at each Mach number.
    #[must_use]
    pub fn density_ratio<S, D>(&self, mach: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        self.ratio(Ratio::Density, mach)
    }

    /// `A/A*` at each Mach number.
    #[must_use]
    pub fn area_ratio<S, D>(&self, mach: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        self.ratio(Ratio::Area, mach)
    }

    #[must_use]
    pub fn temperature_ratio_at(&self, mach: f64) -> f64 {
        self.ratio_at(Ratio::Temperature, mach)
    }

    #[must_use]
    pub fn pressure_ratio_at(&self, mach: f64) -> f64 {
        self.ratio_at(Ratio::Pressure, mach)
    }

    #[must_use]
    pub fn density_ratio_at(&self, mach: f64) -> f64 {
        self.ratio_at(Ratio::Density, mach)
    }

    #[must_use]
    pub fn area_ratio_at(&self, mach: f64) -> f64 {
        self.ratio_at(Ratio::Area, mach)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::{Array1, arr0, array};
    use nozzle_core::ParameterError;

    #[test]
    fn construction_rejects_degenerate_gamma() {
        assert_eq!(
            IsentropicNozzle::new(1.0),
            Err(EvaluatorError::Parameter(ParameterError::Degenerate))
        );
        assert!(matches!(
            IsentropicNozzle::new(0.5),
            Err(EvaluatorError::Parameter(ParameterError::Unphysical { .. }))
        ));
    }

    #[test]
    fn air_is_the_default_gas() {
        let nozzle = IsentropicNozzle::air().unwrap();
        assert_eq!(nozzle.gamma(), SpecificHeatRatio::AIR);
        assert_eq!(nozzle, IsentropicNozzle::new(1.4).unwrap());
    }

    #[test]
    fn preserves_input_shape() {
        let nozzle = IsentropicNozzle::air().unwrap();

        let grid = array![[0.0, 0.5], [1.0, 2.0], [3.0, 4.0]];
        let p = nozzle.pressure_ratio(&grid);
        assert_eq!(p.shape(), &[3, 2]);
        assert_relative_eq!(p[[1, 1]], nozzle.pressure_ratio_at(2.0));

        let scalar = nozzle.area_ratio(&arr0(2.0));
        assert_relative_eq!(scalar.into_scalar(), 1.6875, epsilon = 1e-12);

        let empty = nozzle.temperature_ratio(&Array1::<f64>::zeros(0));
        assert!(empty.is_empty());
    }

    #[test]
    fn accepts_views() {
        let nozzle = IsentropicNozzle::air().unwrap();
        let mach = array![0.5, 1.0, 1.5, 2.0];

        let every_other = nozzle.density_ratio(&mach.slice(ndarray::s![..;2]));
        assert_eq!(every_other.len(), 2);
        assert_relative_eq!(every_other[1], nozzle.density_ratio_at(1.5));
    }

    #[test]
    fn area_ratio_pole_at_rest() {
        let nozzle = IsentropicNozzle::air().unwrap();
        assert_eq!(nozzle.area_ratio_at(0.0), f64::INFINITY);
    }

    #[test]
    fn negative_mach_is_not_guarded() {
        let nozzle = IsentropicNozzle::air().unwrap();

        // Temperature depends on M² only; the area ratio changes sign with M.
        assert_relative_eq!(
            nozzle.temperature_ratio_at(-2.0),
            nozzle.temperature_ratio_at(2.0)
        );
        assert_relative_eq!(nozzle.area_ratio_at(-2.0), -nozzle.area_ratio_at(2.0));
    }

    #[test]
    fn helium_throat_conditions() {
        let nozzle = IsentropicNozzle::new(5.0 / 3.0).unwrap();

        // Critical ratios for a monatomic gas at M = 1.
        assert_abs_diff_eq!(nozzle.temperature_ratio_at(1.0), 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(nozzle.pressure_ratio_at(1.0), 0.487_1, epsilon = 1e-4);
        assert_abs_diff_eq!(nozzle.area_ratio_at(1.0), 1.0, epsilon = 1e-10);
    }
}
