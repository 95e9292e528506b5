//! Sampling of equations into plot points.
//!
//! Drawing is left to the caller; this module only decides where to evaluate
//! and pairs each x with its value.

use crate::{
    ast::Expr,
    error::PlotError,
    interpreter::evaluator::core::Context,
    util::num::{lerp, usize_to_f32_checked},
};

/// The visible region of the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
}

impl Default for Viewport {
    /// `x` in `[-10, 10]`, `y` in `[-5, 5]`.
    fn default() -> Self {
        Self { x_min: -10.0,
               x_max: 10.0,
               y_min: -5.0,
               y_max: 5.0, }
    }
}

impl Viewport {
    /// Creates a viewport from its x and y ranges.
    ///
    /// # Errors
    /// `InvalidRange` if a bound is not finite or a range is empty.
    ///
    /// # Example
    /// ```
    /// use grapher::plot::Viewport;
    ///
    /// assert!(Viewport::new((-1.0, 1.0), (0.0, 2.0)).is_ok());
    /// assert!(Viewport::new((1.0, 1.0), (0.0, 2.0)).is_err());
    /// ```
    pub fn new(x: (f32, f32), y: (f32, f32)) -> Result<Self, PlotError> {
        check_range(x)?;
        check_range(y)?;
        Ok(Self { x_min: x.0,
                  x_max: x.1,
                  y_min: y.0,
                  y_max: y.1, })
    }

    /// Returns the x range.
    #[must_use]
    pub const fn x_range(&self) -> (f32, f32) {
        (self.x_min, self.x_max)
    }

    /// Returns the y range.
    #[must_use]
    pub const fn y_range(&self) -> (f32, f32) {
        (self.y_min, self.y_max)
    }

    /// Returns `true` if the sample lies within the y range. NaN never does.
    #[must_use]
    pub fn contains(&self, sample: Sample) -> bool {
        (self.y_min..=self.y_max).contains(&sample.y)
    }
}

fn check_range((min, max): (f32, f32)) -> Result<(), PlotError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(PlotError::InvalidRange { min, max })
    }
}

/// One evaluated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Where the equation was evaluated.
    pub x: f32,
    /// The value there; may be NaN or infinite.
    pub y: f32,
}

/// Evaluates `expr` at `columns` evenly spaced points spanning the
/// viewport's x range, both ends included.
///
/// # Errors
/// - `TooFewColumns` for fewer than two columns.
/// - `TooManyColumns` if column indices cannot be converted to `f32` exactly.
///
/// # Example
/// ```
/// use grapher::{compile, plot::{Viewport, sample}};
///
/// let expr = compile("2x").unwrap();
/// let viewport = Viewport::new((0.0, 4.0), (0.0, 8.0)).unwrap();
/// let points = sample(&expr, &viewport, 5).unwrap();
///
/// let ys: Vec<f32> = points.iter().map(|p| p.y).collect();
/// assert_eq!(ys, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
/// ```
pub fn sample(expr: &Expr, viewport: &Viewport, columns: usize) -> Result<Vec<Sample>, PlotError> {
    if columns < 2 {
        return Err(PlotError::TooFewColumns { columns });
    }
    let last = usize_to_f32_checked(columns - 1, PlotError::TooManyColumns { columns })?;

    (0..columns).map(|column| {
                    let column = usize_to_f32_checked(column, PlotError::TooManyColumns { columns })?;
                    let x = lerp(column, 0.0, last, viewport.x_min, viewport.x_max);
                    Ok(Sample { x,
                                y: Context::new(x).eval(expr) })
                })
                .collect()
}
