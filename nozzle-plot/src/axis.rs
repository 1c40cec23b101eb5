/// Linear map between a secondary y-axis and the primary plot coordinates.
///
/// egui plots have a single y transform, so a second quantity is drawn by
/// mapping its data range onto the primary data range. Tick labels on the
/// secondary axis use the inverse map to show the secondary values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondaryAxis {
    primary: Span,
    secondary: Span,
}

impl SecondaryAxis {
    /// Fits the map so the finite range of `secondary` spans the finite range
    /// of `primary`.
    pub fn fit(
        primary: impl IntoIterator<Item = f64>,
        secondary: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            primary: Span::of(primary),
            secondary: Span::of(secondary),
        }
    }

    /// Converts a secondary value into primary plot coordinates.
    #[must_use]
    pub fn to_primary(&self, value: f64) -> f64 {
        self.primary.min
            + (value - self.secondary.min) * self.primary.width() / self.secondary.width()
    }

    /// Converts a primary plot coordinate back into a secondary value.
    #[must_use]
    pub fn to_secondary(&self, y: f64) -> f64 {
        self.secondary.min + (y - self.primary.min) * self.secondary.width() / self.primary.width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    min: f64,
    max: f64,
}

impl Span {
    /// Range of the finite values, widened to unit width if degenerate.
    fn of(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });

        if !min.is_finite() {
            Self { min: 0.0, max: 1.0 }
        } else if max > min {
            Self { min, max }
        } else {
            Self {
                min: min - 0.5,
                max: max + 0.5,
            }
        }
    }

    fn width(self) -> f64 {
        self.max - self.min
    }
}
