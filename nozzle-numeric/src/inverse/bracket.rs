/// Current bracket bounds and the residual sign at the left bound.
///
/// The right bound always has the opposite sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from ordered bounds, or `None` if the residual signs
    /// do not bracket a root.
    pub(super) fn new(left: (f64, Sign), right: (f64, Sign)) -> Option<Self> {
        let ((left, left_sign), (right, right_sign)) = if left.0 <= right.0 {
            (left, right)
        } else {
            (right, left)
        };

        if left_sign == right_sign {
            return None;
        }

        Some(Self {
            left,
            right,
            left_sign,
        })
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns true if the bracket width satisfies the x tolerances.
    pub(super) fn is_x_converged(&self, x_abs_tol: f64, x_rel_tol: f64) -> bool {
        self.width() <= x_abs_tol + x_rel_tol * self.midpoint().abs()
    }

    /// Shrinks the bracket using a new endpoint and its residual sign.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if self.left_sign == sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    pub(super) fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn orders_endpoints() {
        let bracket = Bracket::new((3.0, Sign::Positive), (1.0, Sign::Negative)).unwrap();
        assert_relative_eq!(bracket.left, 1.0);
        assert_relative_eq!(bracket.right, 3.0);
        assert_eq!(bracket.left_sign, Sign::Negative);
    }

    #[test]
    fn rejects_no_sign_change() {
        assert!(Bracket::new((0.0, Sign::Positive), (1.0, Sign::Positive)).is_none());
    }

    #[test]
    fn shrink_shifts_bounds() {
        let mut bracket = Bracket::new((0.0, Sign::Negative), (2.0, Sign::Positive)).unwrap();

        bracket.shrink(1.0, Sign::Negative);
        assert_relative_eq!(bracket.left, 1.0);
        assert_relative_eq!(bracket.right, 2.0);

        bracket.shrink(1.5, Sign::Positive);
        assert_relative_eq!(bracket.left, 1.0);
        assert_relative_eq!(bracket.right, 1.5);
        assert_relative_eq!(bracket.midpoint(), 1.25);
    }

    #[test]
    fn converges_on_width() {
        let bracket = Bracket::new((1.0, Sign::Negative), (1.0 + 1e-13, Sign::Positive)).unwrap();
        assert!(bracket.is_x_converged(1e-12, 0.0));
        assert!(!bracket.is_x_converged(1e-14, 0.0));
    }
}
