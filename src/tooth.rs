//! Single tooth profile construction.
//!
//! One tooth is built from two mirrored involute flanks joined by a root arc:
//! the left flank reuses the right flank's radius samples with negated polar
//! angles, so the two sides are exact mirrors by construction rather than by
//! accumulated floating-point agreement.

use crate::errors::{GearError, Result};
use crate::float_types::{FRAC_PI_2, Real, TAU};
use crate::involute::{involute_angle_at_radius, involute_polar_batch, sample_unwrap_angles};
use crate::spec::DerivedDimensions;
use nalgebra::{Point2, Rotation2};

/// Default number of involute samples per flank. Higher values trade compute
/// for curve smoothness; this is the only accuracy/performance knob.
pub const DEFAULT_FLANK_SEGMENTS: usize = 30;

/// Samples along the root connecting arc.
const ROOT_ARC_SEGMENTS: usize = 10;

/// One tooth outline, mirror-symmetric about the +Y axis through its tip.
///
/// The traversal order is semantically significant: left flank from tip down
/// to its base, root arc (when the root circle lies below the base circle),
/// then right flank from base up to tip.
#[derive(Debug, Clone, PartialEq)]
pub struct ToothProfile {
    points: Vec<Point2<Real>>,
}

impl ToothProfile {
    /// Builds the tooth at the default flank resolution.
    pub fn generate(dims: &DerivedDimensions) -> Result<Self> {
        Self::with_resolution(dims, DEFAULT_FLANK_SEGMENTS)
    }

    /// Builds one closed, symmetric tooth outline.
    ///
    /// # Parameters
    /// - `dims`: dimensions derived from a validated spec
    /// - `segments`: involute samples per flank (>= 2)
    ///
    /// # Errors
    /// [`GearError::DegenerateGeometry`] when the tip circle lies below the
    /// base circle, which only hand-assembled dimensions can produce.
    ///
    /// # Panics
    /// `segments` must be at least 2.
    pub fn with_resolution(dims: &DerivedDimensions, segments: usize) -> Result<Self> {
        assert!(segments >= 2);

        if dims.tip_radius < dims.base_radius {
            return Err(GearError::DegenerateGeometry {
                tip_radius: dims.tip_radius,
                base_radius: dims.base_radius,
            });
        }

        // Unwrap angle at which the involute reaches the tip circle.
        let max_angle = involute_angle_at_radius(dims.tip_radius, dims.base_radius);
        let flank =
            involute_polar_batch(dims.base_radius, &sample_unwrap_angles(max_angle, segments));

        // Angular offset placing the flank so the tooth has the target
        // thickness where it crosses the pitch circle.
        let pitch_angle = involute_angle_at_radius(dims.pitch_radius, dims.base_radius);
        let pitch_involute_angle = pitch_angle - pitch_angle.atan();
        let offset = dims.half_tooth_angle() - pitch_involute_angle;

        // Left flank mirrors the right by negating the polar angle of the
        // *same* radius samples. cos(-a) == cos(a) and sin(-a) == -sin(a)
        // exactly, so the mirror is bit-exact.
        let right: Vec<Point2<Real>> = flank
            .iter()
            .map(|p| polar_to_cartesian(p.radius, p.angle + offset))
            .collect();
        let left: Vec<Point2<Real>> = flank
            .iter()
            .map(|p| polar_to_cartesian(p.radius, -(p.angle + offset)))
            .collect();

        let mut points: Vec<Point2<Real>> = Vec::with_capacity(2 * segments + ROOT_ARC_SEGMENTS);
        points.extend(left.iter().rev());

        // Root arc between the flank bases, only when the root circle dips
        // below the base circle.
        if dims.root_radius < dims.base_radius {
            let end_of_left = points[points.len() - 1];
            let start_of_right = right[0];
            let start = shortest_ccw_sweep(
                end_of_left.y.atan2(end_of_left.x),
                start_of_right.y.atan2(start_of_right.x),
            );
            let end = start_of_right.y.atan2(start_of_right.x);
            for i in 0..ROOT_ARC_SEGMENTS {
                let angle = start + (end - start) * i as Real / (ROOT_ARC_SEGMENTS - 1) as Real;
                points.push(polar_to_cartesian(dims.root_radius, angle));
            }
        }

        points.extend(right.iter());

        // Presentation convention: tip along +Y instead of +X. Shape and
        // symmetry are unaffected.
        let upright = Rotation2::new(FRAC_PI_2);
        for p in &mut points {
            *p = upright * *p;
        }

        Ok(Self { points })
    }

    /// Read-only view of the outline; ownership stays with the profile.
    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A copy of this tooth rotated about the origin. Rotation by `0.0` is an
    /// exact identity.
    pub fn rotated(&self, angle: Real) -> Self {
        let rotation = Rotation2::new(angle);
        Self {
            points: self.points.iter().map(|p| rotation * p).collect(),
        }
    }
}

/// Normalizes an arc's start angle so a counter-clockwise sweep from the
/// returned angle to `end` takes the short way around: when `start` is
/// numerically above `end` a full turn is subtracted, which otherwise would
/// send the root arc the long way around the gear.
#[inline]
pub fn shortest_ccw_sweep(start: Real, end: Real) -> Real {
    if start > end { start - TAU } else { start }
}

#[inline]
fn polar_to_cartesian(radius: Real, angle: Real) -> Point2<Real> {
    Point2::new(radius * angle.cos(), radius * angle.sin())
}
