use egui_plot::MarkerShape;
use ndarray::{ArrayBase, Data, Ix1};

use crate::{
    PlotError, SecondaryAxis,
    figure::{Figure, PRIMARY_COLOR, SECONDARY_COLOR, Secondary, Trace, check_len, finite_points},
};

/// Configuration for a Mach number profile plot.
///
/// Construct with [`MachPlot::new`] and chain builder methods as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct MachPlot {
    title: String,
    x_label: String,
}

impl MachPlot {
    /// Creates a config titled "Mach number profile" with "Station" on the x-axis.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Mach number profile".to_owned(),
            x_label: "Station".to_owned(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn x_label(mut self, x_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self
    }

    /// Prepares a figure of `mach` against the station coordinate `x`.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::LengthMismatch`] if the arrays differ in length.
    pub fn figure<S1, S2>(
        &self,
        x: &ArrayBase<S1, Ix1>,
        mach: &ArrayBase<S2, Ix1>,
    ) -> Result<Figure, PlotError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        check_len("mach", x.len(), mach.len())?;

        Ok(Figure {
            title: self.title.clone(),
            x_label: self.x_label.clone(),
            y_label: "Mach number M".to_owned(),
            primary: Trace {
                name: "M".to_owned(),
                points: finite_points(x, mach, |m| m),
                marker: MarkerShape::Circle,
                dashed: false,
                color: PRIMARY_COLOR,
            },
            secondary: None,
        })
    }
}

impl Default for MachPlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a pressure and temperature profile plot.
///
/// Pressure is drawn against the left axis and temperature against the right.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureTemperaturePlot {
    title: String,
    x_label: String,
    pressure_label: String,
    temperature_label: String,
}

impl PressureTemperaturePlot {
    /// Creates a config with SI axis labels and "Station" on the x-axis.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Pressure and temperature profiles".to_owned(),
            x_label: "Station".to_owned(),
            pressure_label: "Pressure [Pa]".to_owned(),
            temperature_label: "Temperature [K]".to_owned(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn x_label(mut self, x_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self
    }

    #[must_use]
    pub fn pressure_label(mut self, label: impl Into<String>) -> Self {
        self.pressure_label = label.into();
        self
    }

    #[must_use]
    pub fn temperature_label(mut self, label: impl Into<String>) -> Self {
        self.temperature_label = label.into();
        self
    }

    /// Prepares a dual-axis figure of `pressure` and `temperature` against
    /// the station coordinate `x`.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::LengthMismatch`] if the arrays differ in length.
    pub fn figure<S1, S2, S3>(
        &self,
        x: &ArrayBase<S1, Ix1>,
        pressure: &ArrayBase<S2, Ix1>,
        temperature: &ArrayBase<S3, Ix1>,
    ) -> Result<Figure, PlotError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
        S3: Data<Elem = f64>,
    {
        check_len("pressure", x.len(), pressure.len())?;
        check_len("temperature", x.len(), temperature.len())?;

        let axis = SecondaryAxis::fit(pressure.iter().copied(), temperature.iter().copied());

        Ok(Figure {
            title: self.title.clone(),
            x_label: self.x_label.clone(),
            y_label: self.pressure_label.clone(),
            primary: Trace {
                name: self.pressure_label.clone(),
                points: finite_points(x, pressure, |p| p),
                marker: MarkerShape::Circle,
                dashed: false,
                color: PRIMARY_COLOR,
            },
            secondary: Some(Secondary {
                trace: Trace {
                    name: self.temperature_label.clone(),
                    points: finite_points(x, temperature, |t| axis.to_primary(t)),
                    marker: MarkerShape::Square,
                    dashed: true,
                    color: SECONDARY_COLOR,
                },
                label: self.temperature_label.clone(),
                axis,
            }),
        })
    }
}

impl Default for PressureTemperaturePlot {
    fn default() -> Self {
        Self::new()
    }
}
