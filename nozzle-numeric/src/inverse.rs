//! Inversion of the area-Mach relation.
//!
//! Every area ratio above one is reached by two Mach numbers, one subsonic
//! and one supersonic, so callers pick a [`Branch`]. The solution is found by
//! bisection in `ln M` between the sonic throat and a bound expanded outward
//! from it, which resolves subsonic roots far below one as precisely as
//! those near the throat.

mod bracket;
mod config;
mod error;

use std::fmt;

use log::{trace, warn};
use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::IsentropicNozzle;

use bracket::{Bracket, Sign};

pub use config::Config;
pub use error::InverseError;

/// Upper limit on the number of halvings or doublings of the outer Mach bound.
const MAX_EXPANSIONS: usize = 1100;

/// Which of the two Mach numbers sharing an area ratio to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    /// `0 < M ≤ 1`
    Subsonic,
    /// `M ≥ 1`
    Supersonic,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Subsonic => f.pad("subsonic"),
            Branch::Supersonic => f.pad("supersonic"),
        }
    }
}

impl IsentropicNozzle {
    /// Finds the Mach number on `branch` whose area ratio `A/A*` equals
    /// `area_ratio`.
    ///
    /// An area ratio of exactly one returns the sonic value `M = 1`. Because
    /// the relation is flat at the throat, ratios very close to one are
    /// resolved less precisely in Mach number than in area.
    ///
    /// # Errors
    ///
    /// Returns an [`InverseError`] if the config is invalid, the area ratio
    /// is non-finite or below one, no bracket can be found, or bisection
    /// does not converge within `config.max_iters` iterations.
    pub fn mach_from_area_ratio(
        &self,
        area_ratio: f64,
        branch: Branch,
        config: &Config,
    ) -> Result<f64, InverseError> {
        config
            .validate()
            .map_err(|reason| InverseError::InvalidConfig { reason })?;

        if !area_ratio.is_finite() {
            return Err(InverseError::NonFinite { area_ratio });
        }
        if area_ratio < 1.0 {
            return Err(InverseError::BelowSonic { area_ratio });
        }
        #[allow(clippy::float_cmp)]
        if area_ratio == 1.0 {
            return Ok(1.0);
        }

        // Relative residual in the area, as a function of ln M.
        let residual = |log_mach: f64| self.area_ratio_at(log_mach.exp()) / area_ratio - 1.0;

        let step = match branch {
            Branch::Subsonic => -std::f64::consts::LN_2,
            Branch::Supersonic => std::f64::consts::LN_2,
        };
        let outer = expand(step, &residual)
            .ok_or(InverseError::NoBracket { area_ratio, branch })?;
        let throat = (0.0, Sign::of(residual(0.0)));

        // Both ends positive means the target is within round-off of the throat.
        let Some(mut bracket) = Bracket::new(throat, outer) else {
            return Ok(1.0);
        };

        for iter in 1..=config.max_iters {
            let log_mach = bracket.midpoint();
            let mach = log_mach.exp();
            let r = residual(log_mach);
            trace!("{branch} iteration {iter}: M = {mach:e}, relative residual = {r:e}");

            if !r.is_finite() {
                return Err(InverseError::NonFiniteResidual { mach, residual: r });
            }
            if r.abs() <= config.area_rel_tol {
                return Ok(mach);
            }

            bracket.shrink(log_mach, Sign::of(r));
            if bracket.is_x_converged(config.log_mach_abs_tol, config.log_mach_rel_tol) {
                return Ok(bracket.midpoint().exp());
            }
        }

        let best = bracket.midpoint().exp();
        warn!(
            "{branch} inversion of A/A* = {area_ratio} stopped after {} iterations at M = {best}",
            config.max_iters
        );
        Err(InverseError::MaxIters {
            iters: config.max_iters,
            best,
        })
    }

    /// Inverts the area-Mach relation element-wise, preserving shape.
    ///
    /// # Errors
    ///
    /// Returns the first [`InverseError`] encountered.
    pub fn mach_from_area_ratios<S, D>(
        &self,
        area_ratios: &ArrayBase<S, D>,
        branch: Branch,
        config: &Config,
    ) -> Result<Array<f64, D>, InverseError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let mut mach = Array::<f64, D>::zeros(area_ratios.raw_dim());
        for (m, &area_ratio) in mach.iter_mut().zip(area_ratios.iter()) {
            *m = self.mach_from_area_ratio(area_ratio, branch, config)?;
        }
        Ok(mach)
    }
}

/// Steps `ln M` away from the throat until the residual turns positive.
fn expand(step: f64, residual: impl Fn(f64) -> f64) -> Option<(f64, Sign)> {
    let mut log_mach = step;
    for _ in 0..MAX_EXPANSIONS {
        let r = residual(log_mach);
        if r.is_nan() {
            return None;
        }
        if r > 0.0 {
            return Some((log_mach, Sign::Positive));
        }
        log_mach += step;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    fn air() -> IsentropicNozzle {
        IsentropicNozzle::air().unwrap()
    }

    #[test]
    fn supersonic_branch_matches_tables() {
        let mach = air()
            .mach_from_area_ratio(1.6875, Branch::Supersonic, &Config::default())
            .unwrap();
        assert_relative_eq!(mach, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn both_branches_reproduce_the_area() {
        let nozzle = air();
        let config = Config::default();

        for target in [1.01, 1.3398, 2.0, 5.0, 25.0] {
            let sub = nozzle
                .mach_from_area_ratio(target, Branch::Subsonic, &config)
                .unwrap();
            let sup = nozzle
                .mach_from_area_ratio(target, Branch::Supersonic, &config)
                .unwrap();

            assert!(sub < 1.0 && sup > 1.0, "target {target}: {sub}, {sup}");
            assert_relative_eq!(nozzle.area_ratio_at(sub), target, max_relative = 1e-9);
            assert_relative_eq!(nozzle.area_ratio_at(sup), target, max_relative = 1e-9);
        }
    }

    #[test]
    fn large_subsonic_targets_reproduce_the_area() {
        let nozzle = air();
        let config = Config::default();

        for exponent in 4..=13 {
            let target = 10f64.powi(exponent);
            let mach = nozzle
                .mach_from_area_ratio(target, Branch::Subsonic, &config)
                .unwrap();

            assert!(mach > 0.0 && mach < 1.0);
            assert_relative_eq!(nozzle.area_ratio_at(mach), target, max_relative = 1e-9);
        }
    }

    #[test]
    fn large_supersonic_targets_reproduce_the_area() {
        let nozzle = air();
        let config = Config::default();

        for target in [1.0e3, 1.0e6, 1.0e9] {
            let mach = nozzle
                .mach_from_area_ratio(target, Branch::Supersonic, &config)
                .unwrap();

            assert!(mach > 1.0);
            assert_relative_eq!(nozzle.area_ratio_at(mach), target, max_relative = 1e-9);
        }
    }

    #[test]
    fn round_trips_a_subsonic_mach() {
        let nozzle = air();
        let area = nozzle.area_ratio_at(0.5);

        let mach = nozzle
            .mach_from_area_ratio(area, Branch::Subsonic, &Config::default())
            .unwrap();
        assert_relative_eq!(mach, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn throat_is_sonic() {
        let nozzle = air();
        for branch in [Branch::Subsonic, Branch::Supersonic] {
            assert_eq!(
                nozzle.mach_from_area_ratio(1.0, branch, &Config::default()),
                Ok(1.0)
            );
        }
    }

    #[test]
    fn rejects_invalid_targets() {
        let nozzle = air();
        let config = Config::default();

        assert_eq!(
            nozzle.mach_from_area_ratio(0.8, Branch::Subsonic, &config),
            Err(InverseError::BelowSonic { area_ratio: 0.8 })
        );
        assert!(matches!(
            nozzle.mach_from_area_ratio(f64::NAN, Branch::Supersonic, &config),
            Err(InverseError::NonFinite { .. })
        ));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = Config {
            log_mach_rel_tol: -1.0,
            ..Config::default()
        };
        assert!(matches!(
            air().mach_from_area_ratio(2.0, Branch::Subsonic, &config),
            Err(InverseError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn reports_exhausted_iterations() {
        let config = Config {
            max_iters: 3,
            log_mach_abs_tol: 0.0,
            log_mach_rel_tol: 0.0,
            area_rel_tol: 0.0,
        };

        let err = air()
            .mach_from_area_ratio(2.0, Branch::Supersonic, &config)
            .unwrap_err();
        assert!(matches!(err, InverseError::MaxIters { iters: 3, .. }));
    }

    #[test]
    fn inverts_arrays() {
        let nozzle = air();
        let areas = array![[1.6875, 1.0], [3.0, 10.0]];

        let mach = nozzle
            .mach_from_area_ratios(&areas, Branch::Supersonic, &Config::default())
            .unwrap();

        assert_eq!(mach.shape(), &[2, 2]);
        assert_relative_eq!(mach[[0, 0]], 2.0, epsilon = 1e-9);
        assert_eq!(mach[[0, 1]], 1.0);
        for (&m, &area) in mach.iter().zip(areas.iter()) {
            assert_relative_eq!(nozzle.area_ratio_at(m), area, max_relative = 1e-9);
        }
    }
}
