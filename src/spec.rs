//! Gear parameters and the dimensions derived from them.
//!
//! [`GearSpec`] is validated once at construction and immutable afterwards;
//! [`DerivedDimensions`] is a one-shot computation from a valid spec. Everything
//! downstream (tooth, gear, report) is a pure function of these two values and
//! can be recomputed idempotently.

use crate::errors::{GearError, Result};
use crate::float_types::{PI, Real, TAU};

/// Validated input parameters for one gear.
///
/// # Example
/// ```
/// use gearrs::GearSpec;
/// let spec = GearSpec::new(12, 2.1336, 20.0).unwrap();
/// assert_eq!(spec.teeth(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearSpec {
    teeth: usize,
    module: Real,
    /// Pressure angle in radians, converted from the degree input.
    pressure_angle: Real,
}

impl GearSpec {
    /// Below this tooth count an involute tooth is geometrically degenerate.
    pub const MIN_TEETH: usize = 3;

    /// Validates the raw inputs and builds a spec.
    ///
    /// # Parameters
    /// - `teeth`: number of teeth (>= 3)
    /// - `module`: gear module, pitch diameter / number of teeth [mm]
    /// - `pressure_angle_deg`: pressure angle in degrees, within (0, 90)
    ///
    /// # Errors
    /// [`GearError::InvalidSpec`] if any parameter is outside its domain.
    pub fn new(teeth: usize, module: Real, pressure_angle_deg: Real) -> Result<Self> {
        if teeth < Self::MIN_TEETH {
            return Err(GearError::InvalidSpec {
                parameter: "teeth",
                value: teeth as Real,
                allowed: ">= 3",
            });
        }
        if !(module > 0.0) {
            return Err(GearError::InvalidSpec {
                parameter: "module",
                value: module,
                allowed: "> 0",
            });
        }
        if !(pressure_angle_deg > 0.0 && pressure_angle_deg < 90.0) {
            return Err(GearError::InvalidSpec {
                parameter: "pressure_angle_deg",
                value: pressure_angle_deg,
                allowed: "(0, 90)",
            });
        }

        Ok(Self {
            teeth,
            module,
            pressure_angle: pressure_angle_deg.to_radians(),
        })
    }

    pub const fn teeth(&self) -> usize {
        self.teeth
    }

    /// Gear module [mm per tooth].
    pub const fn module(&self) -> Real {
        self.module
    }

    /// Pressure angle in radians.
    pub const fn pressure_angle(&self) -> Real {
        self.pressure_angle
    }

    /// One-shot derivation of all working dimensions.
    pub fn dimensions(&self) -> DerivedDimensions {
        DerivedDimensions::from_spec(self)
    }
}

/// All radii and angles a tooth profile is built from, computed once from a
/// [`GearSpec`] and never mutated after.
///
/// For a standard gear `root_radius < base_radius <= pitch_radius < tip_radius`
/// holds; when `root_radius >= base_radius` (large tooth counts) the flanks of
/// a tooth meet the root circle directly and no connecting arc exists.
///
/// Fields are public so non-standard dimension sets can be assembled by hand;
/// the tooth builder rejects combinations it cannot sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedDimensions {
    pub pitch_radius: Real,
    /// `pitch_radius * cos(pressure_angle)`; the involute flank grows from here.
    pub base_radius: Real,
    /// Radial distance from pitch circle to tip circle, `1.0 * module`.
    pub addendum: Real,
    /// Radial distance from pitch circle to root circle, `1.25 * module`.
    pub dedendum: Real,
    pub tip_radius: Real,
    pub root_radius: Real,
    /// Angle subtended by one tooth-plus-gap, `2π / teeth`.
    pub tooth_angle: Real,
    /// Arc-length tooth thickness at the pitch circle, `π·module / 2`.
    pub tooth_thickness: Real,
}

impl DerivedDimensions {
    /// Standard proportions (ISO 21771): addendum `m`, dedendum `1.25·m`.
    pub fn from_spec(spec: &GearSpec) -> Self {
        let m = spec.module();
        let z = spec.teeth() as Real;
        let pitch_radius = 0.5 * m * z;
        let addendum = m;
        let dedendum = 1.25 * m;

        Self {
            pitch_radius,
            base_radius: pitch_radius * spec.pressure_angle().cos(),
            addendum,
            dedendum,
            tip_radius: pitch_radius + addendum,
            root_radius: pitch_radius - dedendum,
            tooth_angle: TAU / z,
            tooth_thickness: PI * m / 2.0,
        }
    }

    pub fn pitch_diameter(&self) -> Real {
        2.0 * self.pitch_radius
    }

    /// Half the angular tooth thickness at the pitch circle.
    pub fn half_tooth_angle(&self) -> Real {
        self.tooth_thickness / (2.0 * self.pitch_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::EPSILON;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_out_of_domain_parameters() {
        assert!(matches!(
            GearSpec::new(2, 2.0, 20.0),
            Err(GearError::InvalidSpec { parameter: "teeth", .. })
        ));
        assert!(matches!(
            GearSpec::new(12, 0.0, 20.0),
            Err(GearError::InvalidSpec { parameter: "module", .. })
        ));
        assert!(matches!(
            GearSpec::new(12, -1.5, 20.0),
            Err(GearError::InvalidSpec { parameter: "module", .. })
        ));
        for bad_angle in [0.0, 90.0, 95.0, -10.0] {
            assert!(matches!(
                GearSpec::new(12, 2.0, bad_angle),
                Err(GearError::InvalidSpec { parameter: "pressure_angle_deg", .. })
            ));
        }
    }

    #[test]
    fn nan_module_is_rejected() {
        assert!(GearSpec::new(12, Real::NAN, 20.0).is_err());
        assert!(GearSpec::new(12, 2.0, Real::NAN).is_err());
    }

    #[test]
    fn radius_ordering_holds_for_valid_specs() {
        for teeth in [3, 5, 12, 42, 200] {
            for pa in [14.5, 20.0, 25.0] {
                let dims = GearSpec::new(teeth, 2.0, pa).unwrap().dimensions();
                assert!(dims.base_radius <= dims.pitch_radius);
                assert!(dims.pitch_radius < dims.tip_radius);
                assert!(dims.root_radius < dims.pitch_radius);
            }
        }
    }

    #[test]
    fn reference_dimensions() {
        // 12 teeth, module 2.1336 mm, 20° pressure angle.
        let dims = GearSpec::new(12, 2.1336, 20.0).unwrap().dimensions();
        assert_relative_eq!(dims.pitch_diameter(), 25.6032, epsilon = 1e-4);
        assert_relative_eq!(2.0 * dims.base_radius, 24.059, epsilon = 1e-3);
        assert_relative_eq!(dims.addendum, 2.1336, epsilon = EPSILON);
        assert_relative_eq!(dims.dedendum, 2.667, epsilon = 1e-3);
        assert!(dims.root_radius < dims.base_radius);
    }
}
