#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while setting up sampling.
pub enum PlotError {
    /// A range bound is not finite, or the lower bound is not below the upper.
    InvalidRange {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },
    /// Fewer than two columns cannot span a range.
    TooFewColumns {
        /// The requested column count.
        columns: usize,
    },
    /// Column indices beyond this count are not exactly representable as
    /// `f32`.
    TooManyColumns {
        /// The requested column count.
        columns: usize,
    },
}

impl std::fmt::Display for PlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "Plot error: Invalid range [{min}, {max}].")
            },
            Self::TooFewColumns { columns } => {
                write!(f, "Plot error: {columns} columns are too few, at least 2 are needed.")
            },
            Self::TooManyColumns { columns } => {
                write!(f, "Plot error: {columns} columns cannot be addressed exactly.")
            },
        }
    }
}

impl std::error::Error for PlotError {}
