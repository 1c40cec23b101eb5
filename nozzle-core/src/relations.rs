//! Isentropic relations for quasi-one-dimensional flow of a perfect gas.
//!
//! Each builder returns an [`Expr`] in the Mach number [`MACH`]. When `γ` is
//! passed as [`Gamma::Symbolic`] the expression also contains [`GAMMA`];
//! when it is bound, the value is closed over and [`MACH`] is the only free
//! symbol.
//!
//! The pressure and density ratios are powers of the temperature ratio
//! expression rather than independent formulas:
//!
//! ```text
//! T/T0     = 1 / (1 + (γ-1)/2 · M²)
//! p/p0     = (T/T0)^(γ/(γ-1))
//! ρ/ρ0     = (T/T0)^(1/(γ-1))
//! A/A*     = (1/M) · [ (2/(γ+1)) · (1 + (γ-1)/2 · M²) ]^((γ+1)/(2(γ-1)))
//! ```

use std::fmt;

use crate::{
    Gamma, SpecificHeatRatio,
    expr::{Expr, Symbol},
};

/// The specific heat ratio symbol.
pub const GAMMA: Symbol = Symbol::new("gamma");

/// The Mach number symbol.
pub const MACH: Symbol = Symbol::new("M");

fn gamma_expr(gamma: Gamma) -> Expr {
    match gamma {
        Gamma::Symbolic => Expr::from(GAMMA),
        Gamma::Bound(value) => Expr::from(value.value()),
    }
}

/// Static-to-stagnation temperature ratio `T/T0`.
#[must_use]
pub fn temperature_ratio(gamma: impl Into<Gamma>) -> Expr {
    let g = gamma_expr(gamma.into());
    let m = Expr::from(MACH);

    1.0 / (1.0 + (g - 1.0) / 2.0 * m.pow(2.0))
}

/// Static-to-stagnation pressure ratio `p/p0 = (T/T0)^(γ/(γ-1))`.
#[must_use]
pub fn pressure_ratio(gamma: impl Into<Gamma>) -> Expr {
    let gamma = gamma.into();
    let g = gamma_expr(gamma);

    temperature_ratio(gamma).pow(g.clone() / (g - 1.0))
}

/// Static-to-stagnation density ratio `ρ/ρ0 = (T/T0)^(1/(γ-1))`.
#[must_use]
pub fn density_ratio(gamma: impl Into<Gamma>) -> Expr {
    let gamma = gamma.into();
    let g = gamma_expr(gamma);

    temperature_ratio(gamma).pow(1.0 / (g - 1.0))
}

/// Area-Mach relation `A/A*`, normalized by the sonic throat area.
///
/// Every ratio above one is reached twice, once on the subsonic branch and
/// once on the supersonic branch. The expression has a pole at `M = 0`.
#[must_use]
pub fn area_mach_ratio(gamma: impl Into<Gamma>) -> Expr {
    let g = gamma_expr(gamma.into());
    let m = Expr::from(MACH);

    let term = (2.0 / (g.clone() + 1.0)) * (1.0 + (g.clone() - 1.0) / 2.0 * m.clone().pow(2.0));
    let exponent = (g.clone() + 1.0) / (2.0 * (g - 1.0));

    (1.0 / m) * term.pow(exponent)
}

/// Identifies one of the four isentropic ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ratio {
    /// `T/T0`
    Temperature,
    /// `p/p0`
    Pressure,
    /// `ρ/ρ0`
    Density,
    /// `A/A*`
    Area,
}

impl Ratio {
    /// Every ratio, in the order they are tabulated.
    pub const ALL: [Ratio; 4] = [
        Ratio::Temperature,
        Ratio::Pressure,
        Ratio::Density,
        Ratio::Area,
    ];

    /// Short name used as the key of the ratio mapping.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Ratio::Temperature => "T_T0",
            Ratio::Pressure => "p_p0",
            Ratio::Density => "rho_rho0",
            Ratio::Area => "A_Astar",
        }
    }

    /// Builds the relation for this ratio.
    #[must_use]
    pub fn expression(self, gamma: impl Into<Gamma>) -> Expr {
        match self {
            Ratio::Temperature => temperature_ratio(gamma),
            Ratio::Pressure => pressure_ratio(gamma),
            Ratio::Density => density_ratio(gamma),
            Ratio::Area => area_mach_ratio(gamma),
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// The four relations with `γ` substituted and simplified.
///
/// Produced by [`expressions_for_gamma`].
#[derive(Debug, Clone, PartialEq)]
pub struct RatioExpressions {
    gamma: SpecificHeatRatio,
    temperature: Expr,
    pressure: Expr,
    density: Expr,
    area: Expr,
}

impl RatioExpressions {
    /// The specific heat ratio these expressions were built for.
    #[must_use]
    pub fn gamma(&self) -> SpecificHeatRatio {
        self.gamma
    }

    #[must_use]
    pub fn get(&self, ratio: Ratio) -> &Expr {
        match ratio {
            Ratio::Temperature => &self.temperature,
            Ratio::Pressure => &self.pressure,
            Ratio::Density => &self.density,
            Ratio::Area => &self.area,
        }
    }

    /// Iterates over `(ratio, expression)` pairs in [`Ratio::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Ratio, &Expr)> {
        Ratio::ALL.into_iter().map(move |ratio| (ratio, self.get(ratio)))
    }
}

/// Substitutes a concrete `γ` into the symbolic relations and simplifies them.
///
/// The result is numerically identical to building each relation with
/// [`Gamma::Bound`] directly; simplification only folds the constants so the
/// expressions are cheaper to evaluate.
#[must_use]
pub fn expressions_for_gamma(gamma: SpecificHeatRatio) -> RatioExpressions {
    let bind = |ratio: Ratio| {
        ratio
            .expression(Gamma::Symbolic)
            .subs(GAMMA, gamma.value())
            .simplify()
    };

    RatioExpressions {
        gamma,
        temperature: bind(Ratio::Temperature),
        pressure: bind(Ratio::Pressure),
        density: bind(Ratio::Density),
        area: bind(Ratio::Area),
    }
}
