//! Mirror-symmetry verification for tooth profiles.
//!
//! Purely diagnostic: a report never alters, corrects, or rejects the tooth it
//! was computed from. Tolerance bands for presenting an error live in
//! [report](crate::report), not here.

use crate::float_types::Real;
use crate::tooth::ToothProfile;

/// Per-point-pair mirror errors for one tooth, with max/average aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetryReport {
    pair_errors: Vec<Real>,
    max_error: Real,
    avg_error: Real,
}

impl SymmetryReport {
    /// Measures how far a tooth is from mirror symmetry about the +Y axis.
    ///
    /// Point `i` is paired with point `n−1−i` for `i` in `[0, n/3)`, and each
    /// error is the distance between point `i` and the expected mirror
    /// `(−x, y)` of its partner. The pairing deliberately stops at a third of
    /// the indices, covering the flank region most sensitive to the thickness
    /// offset; the tip/root region is left unchecked.
    pub fn of(tooth: &ToothProfile) -> Self {
        let points = tooth.points();
        let n = points.len();

        let pair_errors: Vec<Real> = (0..n / 3)
            .map(|i| {
                let p = points[i];
                let q = points[n - 1 - i];
                let x_error = p.x + q.x;
                let y_error = p.y - q.y;
                (x_error * x_error + y_error * y_error).sqrt()
            })
            .collect();

        let max_error = pair_errors.iter().copied().fold(0.0, Real::max);
        let avg_error = if pair_errors.is_empty() {
            0.0
        } else {
            pair_errors.iter().sum::<Real>() / pair_errors.len() as Real
        };

        Self {
            pair_errors,
            max_error,
            avg_error,
        }
    }

    /// The full per-pair error sequence, ordered from the tip inwards.
    pub fn pair_errors(&self) -> &[Real] {
        &self.pair_errors
    }

    pub const fn max_error(&self) -> Real {
        self.max_error
    }

    pub const fn avg_error(&self) -> Real {
        self.avg_error
    }
}

/// Convenience entry point matching the rest of the pipeline's free-standing
/// operations.
pub fn verify_symmetry(tooth: &ToothProfile) -> SymmetryReport {
    SymmetryReport::of(tooth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::GearSpec;

    #[test]
    fn generated_teeth_are_symmetric_by_construction() {
        for teeth in [3, 12, 42, 200] {
            let spec = GearSpec::new(teeth, 2.1336, 20.0).unwrap();
            let tooth = ToothProfile::generate(&spec.dimensions()).unwrap();
            let report = verify_symmetry(&tooth);
            assert!(
                report.max_error() < 1e-6 * spec.module(),
                "teeth = {teeth}: max error {}",
                report.max_error()
            );
            assert!(report.avg_error() <= report.max_error());
        }
    }

    #[test]
    fn pairing_covers_exactly_the_first_third() {
        // Known coverage gap: only the outer third of index pairs is checked,
        // so the root-arc and tip regions go unverified.
        let spec = GearSpec::new(12, 2.1336, 20.0).unwrap();
        let tooth = ToothProfile::generate(&spec.dimensions()).unwrap();
        let report = verify_symmetry(&tooth);
        assert_eq!(report.pair_errors().len(), tooth.len() / 3);
    }

    #[test]
    fn report_does_not_depend_on_tooth_identity() {
        let spec = GearSpec::new(12, 2.1336, 20.0).unwrap();
        let dims = spec.dimensions();
        let a = verify_symmetry(&ToothProfile::generate(&dims).unwrap());
        let b = verify_symmetry(&ToothProfile::generate(&dims).unwrap());
        assert_eq!(a, b);
    }
}
