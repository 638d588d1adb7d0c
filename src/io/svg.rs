//! SVG rendering sink.
//!
//! Draws every tooth outline plus the four dashed reference circles (pitch,
//! base, tip, root). The SVG y axis grows downwards, so y coordinates are
//! negated to keep the conventional orientation.

use crate::float_types::Real;
use crate::gear::GearProfile;
use crate::io::IoError;
use crate::spec::DerivedDimensions;
use std::path::Path;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path as SvgPath};

/// Fraction of the tip radius added as margin around the drawing.
const MARGIN: Real = 0.1;

/// Builds an SVG document for a complete gear.
///
/// The first tooth is highlighted so the unrotated base tooth can be picked
/// out by eye.
pub fn document(gear: &GearProfile, dims: &DerivedDimensions) -> Document {
    let extent = (1.0 + MARGIN) * dims.tip_radius;
    let stroke_width = 0.01 * dims.tip_radius;
    let mut doc = Document::new().set(
        "viewBox",
        (-extent, -extent, 2.0 * extent, 2.0 * extent),
    );

    for (radius, color) in [
        (dims.pitch_radius, "green"),
        (dims.base_radius, "red"),
        (dims.tip_radius, "magenta"),
        (dims.root_radius, "cyan"),
    ] {
        doc = doc.add(reference_circle(radius, color, stroke_width));
    }

    for (i, tooth) in gear.teeth().iter().enumerate() {
        let color = if i == 0 { "red" } else { "blue" };
        doc = doc.add(tooth_path(tooth.points(), color, 2.0 * stroke_width));
    }

    doc
}

/// Renders the gear and saves it to `path`.
pub fn write_svg<P: AsRef<Path>>(
    path: P,
    gear: &GearProfile,
    dims: &DerivedDimensions,
) -> Result<(), IoError> {
    svg::save(path, &document(gear, dims))?;
    Ok(())
}

fn reference_circle(radius: Real, color: &str, stroke_width: Real) -> Circle {
    Circle::new()
        .set("cx", 0)
        .set("cy", 0)
        .set("r", radius)
        .set("fill", "none")
        .set("stroke", color)
        .set("stroke-width", stroke_width)
        .set("stroke-dasharray", format!("{0},{0}", 4.0 * stroke_width))
}

fn tooth_path(points: &[nalgebra::Point2<Real>], color: &str, stroke_width: Real) -> SvgPath {
    let mut data = Data::new().move_to((points[0].x, -points[0].y));
    for p in &points[1..] {
        data = data.line_to((p.x, -p.y));
    }
    SvgPath::new()
        .set("fill", "none")
        .set("stroke", color)
        .set("stroke-width", stroke_width)
        .set("d", data)
}
