//! Range tests shared by the palette filters.

/// Mathematical modulo: the result has the sign of `m`.
///
/// Hue differences are negative whenever `val < theta`, and `%` alone would
/// keep that sign.
#[inline]
pub fn modulo(n: f64, m: f64) -> f64 {
    ((n % m) + m) % m
}

/// Inclusive containment, `min <= val <= max`.
#[inline]
pub fn between(val: f64, min: f64, max: f64) -> bool {
    val >= min && val <= max
}

/// Circular containment on the 360 degree hue wheel.
///
/// True when `| modulo(val - theta, 360) - range | <= range`, i.e. when `val`
/// is reached by travelling between 0 and `2 * range` degrees forward from
/// `theta`. The fold makes windows that cross 0/360 work. It is not a
/// minimal-angular-distance test: hues just below `theta` are rejected.
#[inline]
pub fn polar_between(val: f64, theta: f64, range: f64) -> bool {
    (modulo(val - theta, 360.0) - range).abs() <= range
}
