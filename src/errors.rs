//! Validation and construction errors

use crate::float_types::Real;
use thiserror::Error;

/// All the ways gear construction can fail.
///
/// Both kinds are unrecoverable for the spec that produced them: they surface
/// to the caller immediately and no partial profile is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GearError {
    /// A parameter is outside its domain. Raised synchronously when a
    /// [GearSpec](crate::spec::GearSpec) is constructed, never mid-computation.
    #[error("invalid spec: {parameter} = {value} (allowed: {allowed})")]
    InvalidSpec {
        parameter: &'static str,
        value: Real,
        allowed: &'static str,
    },

    /// The tip circle lies below the base circle, so the involute flank never
    /// reaches the tip. Detected before any sampling so no NaNs are produced.
    /// Only reachable through hand-edited dimensions, not from a valid spec.
    #[error("degenerate geometry: tip radius {tip_radius} is below base radius {base_radius}")]
    DegenerateGeometry { tip_radius: Real, base_radius: Real },
}

/// Convenience type alias for results using [`GearError`].
pub type Result<T> = std::result::Result<T, GearError>;
