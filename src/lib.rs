//! **gearrs** — generation of 2-D **involute gear** tooth profiles, built as a pure
//! pipeline over immutable values: a [GearSpec](spec::GearSpec) is validated once, its
//! [DerivedDimensions](spec::DerivedDimensions) are computed once, and every profile is
//! derived from those.
//!
//! The pipeline runs strictly one way: spec → [involute] evaluator →
//! [tooth](tooth::ToothProfile) builder → [gear](gear::GearProfile) assembler →
//! ([symmetry] verifier, [report]/[io] sinks). No component mutates another's output.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: render gear profiles to SVG documents
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to replicate teeth concurrently

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod gear;
pub mod involute;
pub mod io;
pub mod report;
pub mod spec;
pub mod symmetry;
pub mod tooth;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{GearError, Result};
pub use gear::GearProfile;
pub use spec::{DerivedDimensions, GearSpec};
pub use symmetry::{SymmetryReport, verify_symmetry};
pub use tooth::ToothProfile;
