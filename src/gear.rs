//! Full gear assembly from a single tooth.

use crate::errors::Result;
use crate::float_types::Real;
use crate::spec::GearSpec;
use crate::tooth::{DEFAULT_FLANK_SEGMENTS, ToothProfile};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The complete gear boundary: one independently stored, rotated copy of the
/// base tooth per tooth position.
///
/// Tooth `i` is the base tooth rotated by `i · tooth_angle`; index 0 is the
/// unrotated base tooth, and consumers may rely on that ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct GearProfile {
    teeth: Vec<ToothProfile>,
}

impl GearProfile {
    /// Generates the gear at the default flank resolution.
    ///
    /// # Example
    /// ```
    /// use gearrs::{GearProfile, GearSpec};
    /// let spec = GearSpec::new(12, 2.1336, 20.0).unwrap();
    /// let gear = GearProfile::generate(&spec).unwrap();
    /// assert_eq!(gear.teeth().len(), 12);
    /// ```
    pub fn generate(spec: &GearSpec) -> Result<Self> {
        Self::with_resolution(spec, DEFAULT_FLANK_SEGMENTS)
    }

    /// Builds the base tooth once, then replicates it around the circle.
    ///
    /// Replication is embarrassingly parallel; with the `parallel` feature the
    /// per-tooth rotations run on rayon, with identical results.
    pub fn with_resolution(spec: &GearSpec, segments: usize) -> Result<Self> {
        let dims = spec.dimensions();
        let base = ToothProfile::with_resolution(&dims, segments)?;

        #[cfg(feature = "parallel")]
        let teeth = (0..spec.teeth())
            .into_par_iter()
            .map(|i| base.rotated(i as Real * dims.tooth_angle))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let teeth = (0..spec.teeth())
            .map(|i| base.rotated(i as Real * dims.tooth_angle))
            .collect();

        Ok(Self { teeth })
    }

    /// Read-only view of the teeth, ordered by increasing rotation.
    pub fn teeth(&self) -> &[ToothProfile] {
        &self.teeth
    }

    pub fn len(&self) -> usize {
        self.teeth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teeth.is_empty()
    }
}
