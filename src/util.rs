/// Numeric helpers.
///
/// This module provides linear interpolation and safe conversions from
/// indices to `f32` for the sampler, without risking silent rounding of
/// large indices.
pub mod num;
