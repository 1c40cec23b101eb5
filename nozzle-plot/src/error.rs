use thiserror::Error;

/// Errors that can occur when building or showing a plot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// A series is not aligned index-for-index with the station coordinates.
    #[error("series `{series}` has {found} point(s), expected {expected}")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        found: usize,
    },

    /// The native window could not be created.
    #[error(transparent)]
    Window(#[from] eframe::Error),
}
