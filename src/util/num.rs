/// Largest integer exactly representable as an `f32` (`2^24`).
pub const MAX_SAFE_F32_INT: usize = 16_777_216;

/// Safely converts a `usize` to `f32` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_F32_INT`.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use grapher::util::num::{MAX_SAFE_F32_INT, usize_to_f32_checked};
///
/// assert_eq!(usize_to_f32_checked(42, "too big!"), Ok(42.0));
/// assert!(usize_to_f32_checked(MAX_SAFE_F32_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f32_checked<E>(value: usize, error: E) -> Result<f32, E> {
    if value > MAX_SAFE_F32_INT {
        return Err(error);
    }
    Ok(value as f32)
}

/// Maps `value` from the range `[from_low, from_high]` onto
/// `[to_low, to_high]`.
///
/// Values outside the source range extrapolate linearly. A degenerate source
/// range yields NaN or infinity, as the division does.
///
/// ## Example
/// ```
/// use grapher::util::num::lerp;
///
/// assert_eq!(lerp(5.0, 0.0, 10.0, -1.0, 1.0), 0.0);
/// assert_eq!(lerp(0.0, 0.0, 10.0, -10.0, 10.0), -10.0);
/// ```
#[must_use]
pub fn lerp(value: f32, from_low: f32, from_high: f32, to_low: f32, to_high: f32) -> f32 {
    to_low + (value - from_low) / (from_high - from_low) * (to_high - to_low)
}
