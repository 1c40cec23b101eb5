use std::ops::RangeInclusive;

use eframe::egui::{self, Color32};
use egui_plot::{
    AxisHints, GridMark, HPlacement, Legend, Line, LineStyle, MarkerShape, Plot, Points,
};
use ndarray::{ArrayBase, Data, Ix1};

use crate::{PlotError, SecondaryAxis};

pub(crate) const PRIMARY_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
pub(crate) const SECONDARY_COLOR: Color32 = Color32::from_rgb(255, 127, 14);

/// One line-with-markers series, in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub marker: MarkerShape,
    pub dashed: bool,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Secondary {
    pub(crate) trace: Trace,
    pub(crate) label: String,
    pub(crate) axis: SecondaryAxis,
}

/// A fully prepared chart, ready to be shown.
///
/// Built by [`MachPlot::figure`](crate::MachPlot::figure) or
/// [`PressureTemperaturePlot::figure`](crate::PressureTemperaturePlot::figure).
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub(crate) title: String,
    pub(crate) x_label: String,
    pub(crate) y_label: String,
    pub(crate) primary: Trace,
    pub(crate) secondary: Option<Secondary>,
}

impl Figure {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    #[must_use]
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Label of the right-hand axis, if the figure has one.
    #[must_use]
    pub fn secondary_label(&self) -> Option<&str> {
        self.secondary.as_ref().map(|s| s.label.as_str())
    }

    /// The map used to draw the right-hand series, if the figure has one.
    #[must_use]
    pub fn secondary_axis(&self) -> Option<&SecondaryAxis> {
        self.secondary.as_ref().map(|s| &s.axis)
    }

    /// Iterates over the traces, primary first.
    pub fn traces(&self) -> impl Iterator<Item = &Trace> {
        std::iter::once(&self.primary).chain(self.secondary.as_ref().map(|s| &s.trace))
    }

    /// Opens a blocking egui window displaying the figure.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::Window`] if the native window cannot be created.
    pub fn show(self) -> Result<(), PlotError> {
        let title = self.title.clone();

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(PlotApp { figure: self }))),
        )?;

        Ok(())
    }

    fn ui(&self, ui: &mut egui::Ui) {
        ui.heading(&self.title);

        let mut y_axes = vec![AxisHints::new_y().label(self.y_label.clone())];
        if let Some(secondary) = &self.secondary {
            let axis = secondary.axis;
            y_axes.push(
                AxisHints::new_y()
                    .label(secondary.label.clone())
                    .placement(HPlacement::Right)
                    .formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
                        format!("{:.1}", axis.to_secondary(mark.value))
                    }),
            );
        }

        Plot::new("nozzle-profile")
            .legend(Legend::default())
            .x_axis_label(self.x_label.clone())
            .custom_y_axes(y_axes)
            .show(ui, |plot_ui| {
                for trace in self.traces() {
                    let mut line = Line::new(trace.points.clone())
                        .name(&trace.name)
                        .color(trace.color);
                    if trace.dashed {
                        line = line.style(LineStyle::dashed_loose());
                    }
                    plot_ui.line(line);

                    plot_ui.points(
                        Points::new(trace.points.clone())
                            .name(&trace.name)
                            .shape(trace.marker)
                            .color(trace.color)
                            .radius(3.0),
                    );
                }
            });
    }
}

/// The egui [`eframe::App`] that renders a [`Figure`].
struct PlotApp {
    figure: Figure,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| self.figure.ui(ui));
    }
}

/// Checks that a series is aligned with the station coordinates.
pub(crate) fn check_len(
    series: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), PlotError> {
    if expected == found {
        Ok(())
    } else {
        Err(PlotError::LengthMismatch {
            series,
            expected,
            found,
        })
    }
}

/// Pairs `x` with `y`, dropping points that cannot be drawn.
pub(crate) fn finite_points<S1, S2>(
    x: &ArrayBase<S1, Ix1>,
    y: &ArrayBase<S2, Ix1>,
    map_y: impl Fn(f64) -> f64,
) -> Vec<[f64; 2]>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    x.iter()
        .zip(y.iter())
        .map(|(&x, &y)| [x, map_y(y)])
        .filter(|[x, y]| x.is_finite() && y.is_finite())
        .collect()
}
