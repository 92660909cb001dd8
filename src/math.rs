//! Pure numeric helpers used by terrain generation and map statistics.

/// Maps a noise value from the standard `[-1, 1]` range into `[min, max]`.
///
/// Noise generators (e.g. `Fbm<Perlin>`) produce values centred around zero
/// and occasionally overshoot slightly; the result is clamped to the range.
///
/// # Examples
/// ```
/// # use hex_map::math::map_noise_to_range;
/// assert_eq!(map_noise_to_range(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(map_noise_to_range( 1.0, 0.0, 10.0), 10.0);
/// assert_eq!(map_noise_to_range( 0.0, 2.0, 6.0),  4.0);
/// ```
pub fn map_noise_to_range(noise_val: f64, min: f64, max: f64) -> f64 {
    let t = ((noise_val + 1.0) / 2.0).clamp(0.0, 1.0);
    min + t * (max - min)
}

/// Rounds to `decimals` places after the point.
///
/// Keeps generated movement costs short in the JSON output.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Linear interpolation between `a` and `b`; `t` is not clamped.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Where `value` sits between `min` and `max`, clamped to `[0, 1]`.
///
/// Returns `0.0` for an empty range.
pub fn inverse_lerp(min: f64, max: f64, value: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}
