//! Involute curve evaluation.
//!
//! The involute of a circle is the path traced by a point on a taut string
//! unwound from that circle; gear flanks use it because it preserves
//! constant-velocity meshing. Everything here is a pure function of its
//! arguments.

use crate::float_types::Real;

/// A point on an involute in polar form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub radius: Real,
    /// Polar angle relative to the involute's start on the base circle.
    pub angle: Real,
}

/// Classic involute parametrization for unwrap angle `theta`:
///
/// radius(θ) = b·sqrt( 1 + θ² )
/// angle(θ)  = θ − atan(θ)
///
/// Both outputs are monotonically increasing in `theta`; callers may rely on
/// that for correctness checks. `base_radius <= 0` is a precondition violation
/// rejected at [GearSpec](crate::spec::GearSpec) construction, not here.
#[inline]
pub fn involute_polar(base_radius: Real, theta: Real) -> PolarPoint {
    PolarPoint {
        radius: base_radius * (1.0 + theta * theta).sqrt(),
        angle: theta - theta.atan(),
    }
}

/// Batched evaluation over an arbitrary-length sequence of unwrap angles.
pub fn involute_polar_batch(base_radius: Real, thetas: &[Real]) -> Vec<PolarPoint> {
    thetas
        .iter()
        .map(|&theta| involute_polar(base_radius, theta))
        .collect()
}

/// Unwrap angle at which the involute from base radius `rb` crosses radius `r`.
///
/// φ = sqrt( (r/rb)² − 1 ), clamped at 0 for `r < rb`.
#[inline]
pub fn involute_angle_at_radius(r: Real, rb: Real) -> Real {
    ((r / rb).powi(2) - 1.0).max(0.0).sqrt()
}

/// Uniform sampling of `[0, max_angle]`, both endpoints included.
///
/// # Panics
/// `count` must be at least 2.
pub fn sample_unwrap_angles(max_angle: Real, count: usize) -> Vec<Real> {
    assert!(count >= 2, "need at least two samples to span [0, max_angle]");
    (0..count)
        .map(|i| max_angle * i as Real / (count - 1) as Real)
        .collect()
}
