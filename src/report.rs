//! Console report formatting.
//!
//! The narration sink of the pipeline: pure functions turning dimensions and
//! symmetry numbers into human-readable text. The caller decides where the
//! text goes, so the geometric core stays free of I/O.

use crate::float_types::Real;
use crate::spec::{DerivedDimensions, GearSpec};
use crate::symmetry::SymmetryReport;
use std::fmt::Write;

/// Presentation band for a symmetry error, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryBand {
    /// Below 0.001 mm.
    Excellent,
    /// Below 0.01 mm.
    Good,
    /// Below 0.1 mm.
    Acceptable,
    /// 0.1 mm or worse.
    Poor,
}

impl SymmetryBand {
    pub fn classify(max_error: Real) -> Self {
        if max_error < 0.001 {
            Self::Excellent
        } else if max_error < 0.01 {
            Self::Good
        } else if max_error < 0.1 {
            Self::Acceptable
        } else {
            Self::Poor
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT: tooth is symmetric within 0.001 mm",
            Self::Good => "GOOD: tooth is symmetric within 0.01 mm",
            Self::Acceptable => "ACCEPTABLE: tooth is symmetric within 0.1 mm",
            Self::Poor => "POOR: symmetry error exceeds 0.1 mm",
        }
    }
}

/// Formats the gear parameter block.
pub fn gear_summary(spec: &GearSpec, dims: &DerivedDimensions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Gear Parameters:");
    let _ = writeln!(out, "  Number of teeth: {}", spec.teeth());
    let _ = writeln!(out, "  Module: {:.4} mm", spec.module());
    let _ = writeln!(out, "  Pressure angle: {:.1}°", spec.pressure_angle().to_degrees());
    let _ = writeln!(out, "  Pitch diameter: {:.3} mm", dims.pitch_diameter());
    let _ = writeln!(out, "  Base diameter: {:.3} mm", 2.0 * dims.base_radius);
    let _ = writeln!(out, "  Tip diameter: {:.3} mm", 2.0 * dims.tip_radius);
    let _ = writeln!(out, "  Root diameter: {:.3} mm", 2.0 * dims.root_radius);
    out
}

/// Formats the symmetry analysis block, applying the tolerance bands.
pub fn symmetry_summary(report: &SymmetryReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Symmetry Analysis:");
    let _ = writeln!(out, "  Maximum error: {:.6} mm", report.max_error());
    let _ = writeln!(out, "  Average error: {:.6} mm", report.avg_error());
    let _ = writeln!(out, "  {}", SymmetryBand::classify(report.max_error()).label());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tooth::ToothProfile;

    #[test]
    fn bands_apply_in_order() {
        assert_eq!(SymmetryBand::classify(0.0), SymmetryBand::Excellent);
        assert_eq!(SymmetryBand::classify(0.0005), SymmetryBand::Excellent);
        assert_eq!(SymmetryBand::classify(0.005), SymmetryBand::Good);
        assert_eq!(SymmetryBand::classify(0.05), SymmetryBand::Acceptable);
        assert_eq!(SymmetryBand::classify(0.5), SymmetryBand::Poor);
    }

    #[test]
    fn summaries_carry_the_headline_numbers() {
        let spec = GearSpec::new(12, 2.1336, 20.0).unwrap();
        let dims = spec.dimensions();
        let summary = gear_summary(&spec, &dims);
        assert!(summary.contains("Number of teeth: 12"));
        assert!(summary.contains("Module: 2.1336 mm"));
        assert!(summary.contains("Pitch diameter: 25.603 mm"));

        let tooth = ToothProfile::generate(&dims).unwrap();
        let sym = symmetry_summary(&crate::symmetry::verify_symmetry(&tooth));
        assert!(sym.contains("Maximum error: 0.000000 mm"));
        assert!(sym.contains("EXCELLENT"));
    }
}
