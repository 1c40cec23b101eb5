/// Stopping criteria for inverting the area-Mach relation.
///
/// The bracket is bisected in `ln M`, so the Mach tolerances bound the
/// relative error in `M` rather than its absolute value. This keeps the
/// precision uniform on the subsonic branch, where large area ratios put
/// the root many orders of magnitude below one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Iterations allowed once a bracket has been found.
    pub max_iters: usize,

    /// Absolute tolerance on the width of the bracket in `ln M`.
    pub log_mach_abs_tol: f64,

    /// Tolerance on the `ln M` bracket width relative to `|ln M|`.
    pub log_mach_rel_tol: f64,

    /// Accept a Mach number once `|A(M) / target - 1|` is within this value.
    pub area_rel_tol: f64,
}

impl Default for Config {
    /// Tight enough to reproduce any finite target area to about 1e-12.
    fn default() -> Self {
        Self {
            max_iters: 100,
            log_mach_abs_tol: 1e-12,
            log_mach_rel_tol: 1e-12,
            area_rel_tol: 1e-12,
        }
    }
}

impl Config {
    /// Checks that at least one iteration is allowed and that every
    /// tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iters == 0 {
            return Err("max_iters must be at least 1");
        }

        let tolerances = [
            (self.log_mach_abs_tol, "log_mach_abs_tol must be finite and non-negative"),
            (self.log_mach_rel_tol, "log_mach_rel_tol must be finite and non-negative"),
            (self.area_rel_tol, "area_rel_tol must be finite and non-negative"),
        ];

        match tolerances.into_iter().find(|(tol, _)| !tol.is_finite() || *tol < 0.0) {
            Some((_, reason)) => Err(reason),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn names_the_offending_field() {
        let config = Config {
            log_mach_abs_tol: -1.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err("log_mach_abs_tol must be finite and non-negative"));

        let config = Config {
            area_rel_tol: f64::NAN,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err("area_rel_tol must be finite and non-negative"));

        let config = Config {
            max_iters: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err("max_iters must be at least 1"));
    }

    #[test]
    fn zero_tolerances_are_allowed() {
        let config = Config {
            log_mach_abs_tol: 0.0,
            log_mach_rel_tol: 0.0,
            area_rel_tol: 0.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
